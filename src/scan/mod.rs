// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-pass anchored scan of an input buffer.
//!
//! The scanner moves left to right once. A letter following a non-letter
//! (or the start of the buffer) is an **anchor**, and only anchors start a
//! trie walk; letters inside a run never re-anchor. Digits, punctuation and
//! whitespace end a run.
//!
//! ```text
//! a1b2cc
//! ^ ^ ^        anchors at 0, 2, 4
//! ```
//!
//! Row and column are carried along as a [`Position`] value, independent of
//! anchoring, and every record reports the position of its anchor.
//!
//! This is not Aho-Corasick: there are no failure links. Work is bounded by
//! (number of letter runs) × (trie depth), which is linear for ordinary text.

pub mod position;
#[cfg(feature = "parallel")]
pub mod shard;
pub mod walk;

use std::ops::Range;

use crate::classify::{Classifier, CLASSIFIER};
use crate::error::Result;
use crate::report::{AmbiguityPolicy, MatchRecord, MatchSink};
use crate::trie::PatternTrie;

pub use position::Position;
pub use walk::{walk, Walk, MIN_MATCH_LEN};

/// Anchors of a buffer (or a range of it) with their positions.
pub struct Anchors<'b, 'c> {
    buffer: &'b [u8],
    classifier: &'c Classifier,
    cursor: usize,
    end: usize,
    position: Position,
    inside: bool,
}

impl<'b, 'c> Anchors<'b, 'c> {
    /// Anchors in `range`. `start` must be the position of `range.start`,
    /// and `range.start` must not be inside a letter run that began earlier.
    pub fn new(
        buffer: &'b [u8],
        classifier: &'c Classifier,
        range: Range<usize>,
        start: Position,
    ) -> Self {
        Self {
            buffer,
            classifier,
            cursor: range.start,
            end: range.end.min(buffer.len()),
            position: start,
            inside: false,
        }
    }
}

impl Iterator for Anchors<'_, '_> {
    type Item = (usize, Position);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.end {
            let offset = self.cursor;
            let byte = self.buffer[offset];
            let position = self.position;
            self.position = position.advance(byte);
            self.cursor += 1;

            if !self.classifier.is_letter(byte) {
                self.inside = false;
                continue;
            }
            if !self.inside {
                self.inside = true;
                return Some((offset, position));
            }
        }
        None
    }
}

/// Scans input buffers against a built [`PatternTrie`].
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'t, 'c> {
    trie: &'t PatternTrie,
    classifier: &'c Classifier,
    policy: AmbiguityPolicy,
}

impl<'t> Scanner<'t, 'static> {
    pub fn new(trie: &'t PatternTrie) -> Self {
        Self::with_classifier(trie, &CLASSIFIER)
    }
}

impl<'t, 'c> Scanner<'t, 'c> {
    pub fn with_classifier(trie: &'t PatternTrie, classifier: &'c Classifier) -> Self {
        Self {
            trie,
            classifier,
            policy: AmbiguityPolicy::default(),
        }
    }

    pub fn policy(mut self, policy: AmbiguityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn classifier(&self) -> &'c Classifier {
        self.classifier
    }

    /// Anchors of the whole buffer.
    pub fn anchors<'b>(&self, buffer: &'b [u8]) -> Anchors<'b, 'c> {
        Anchors::new(buffer, self.classifier, 0..buffer.len(), Position::start())
    }

    /// Walk the trie from one anchor.
    pub fn walk_at(&self, buffer: &[u8], anchor: usize) -> Walk<'t> {
        walk(buffer, anchor, anchor, self.trie.root(), self.policy)
    }

    /// Scan the whole buffer, handing each record to `sink` as it is found.
    /// Returns the number of records reported.
    pub fn scan(&self, buffer: &[u8], sink: &mut impl MatchSink) -> Result<usize> {
        self.scan_range(buffer, 0..buffer.len(), Position::start(), sink)
    }

    /// Scan only the anchors inside `range`. Walks may read past
    /// `range.end`; a match is owned by the range holding its anchor.
    pub fn scan_range(
        &self,
        buffer: &[u8],
        range: Range<usize>,
        start: Position,
        sink: &mut impl MatchSink,
    ) -> Result<usize> {
        let mut reported = 0;
        for (anchor, position) in Anchors::new(buffer, self.classifier, range, start) {
            if let Walk::Reported { end, resolution } = self.walk_at(buffer, anchor) {
                let matched = String::from_utf8_lossy(&buffer[anchor..end]);
                for pattern in resolution.patterns() {
                    sink.report(MatchRecord {
                        row: position.row,
                        column: position.column,
                        offset: anchor,
                        matched: matched.clone().into_owned(),
                        pattern: pattern.to_string(),
                    })?;
                    reported += 1;
                }
            }
        }
        Ok(reported)
    }

    /// Every record of the buffer, in order.
    pub fn matches(&self, buffer: &[u8]) -> Vec<MatchRecord> {
        let mut records: Vec<MatchRecord> = Vec::new();
        // Collecting into a Vec cannot fail
        let _ = self.scan(buffer, &mut records);
        records
    }
}
