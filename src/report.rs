// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match resolution and output.
//!
//! A trie node that ends a walk may stand for several canonical patterns.
//! We never guess between them: under the default policy a node reports only
//! when it resolves to exactly one pattern. Precision over recall.
//!
//! Resolution looks at the exact set first. If the matched text spells some
//! pattern (or one of its aliases) exactly, only those patterns compete, so
//! "cat" in the text is "cat" even though "cot" also has the phonetic key
//! "cat". Otherwise the whole terminal set competes.
//!
//! Records are written one line at a time as they are found:
//!
//! ```text
//! row,column,offset,matched,pattern
//! 1,5,4,hello,hello
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::trie::TrieNode;

/// What a terminal node resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'t> {
    Unique(&'t str),
    Ambiguous(&'t BTreeSet<String>),
}

impl<'t> Resolution<'t> {
    /// Resolve a node, or `None` when no variant ends there.
    pub fn of(node: &'t TrieNode) -> Option<Self> {
        let candidates = if node.exact().is_empty() {
            node.terminal()?
        } else {
            node.exact()
        };
        let mut iter = candidates.iter();
        match (iter.next(), iter.next()) {
            (Some(only), None) => Some(Resolution::Unique(only)),
            (Some(_), Some(_)) => Some(Resolution::Ambiguous(candidates)),
            (None, _) => None,
        }
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, Resolution::Unique(_))
    }

    /// Candidate patterns in sorted order.
    pub fn patterns(&self) -> Vec<&'t str> {
        match self {
            Resolution::Unique(p) => vec![*p],
            Resolution::Ambiguous(set) => set.iter().map(String::as_str).collect(),
        }
    }
}

/// What to do with a terminal that resolves to more than one pattern.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AmbiguityPolicy {
    /// Stay silent.
    #[default]
    Suppress,
    /// Emit one record per candidate pattern.
    ReportAll,
}

impl AmbiguityPolicy {
    pub fn accepts(&self, resolution: &Resolution<'_>) -> bool {
        match self {
            AmbiguityPolicy::Suppress => resolution.is_unique(),
            AmbiguityPolicy::ReportAll => true,
        }
    }
}

/// One reported occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRecord {
    /// 1-based line of the anchor.
    pub row: usize,
    /// 1-based column of the anchor.
    pub column: usize,
    /// Byte offset of the anchor.
    pub offset: usize,
    /// Input text from the anchor to the end of the match, casing preserved.
    pub matched: String,
    /// Canonical pattern (lowercase).
    pub pattern: String,
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.row, self.column, self.offset, self.matched, self.pattern
        )
    }
}

/// Receives records as the scanner finds them.
pub trait MatchSink {
    fn report(&mut self, record: MatchRecord) -> Result<()>;
}

impl MatchSink for Vec<MatchRecord> {
    fn report(&mut self, record: MatchRecord) -> Result<()> {
        self.push(record);
        Ok(())
    }
}

/// Writes each record as a CSV line the moment it arrives.
pub struct MatchReporter<W: Write> {
    out: W,
    reported: usize,
}

impl<W: Write> MatchReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, reported: 0 }
    }

    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MatchSink for MatchReporter<W> {
    fn report(&mut self, record: MatchRecord) -> Result<()> {
        writeln!(self.out, "{}", record)?;
        self.out.flush()?;
        self.reported += 1;
        Ok(())
    }
}
