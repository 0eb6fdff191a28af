// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Depth-first trie walk from one anchor.
//!
//! The walk follows the input byte by byte down the trie, trying the deeper
//! node before judging the current one. Results compose bottom-up:
//!
//! - if the deeper walk reported a match, that longer match stands and
//!   shorter terminals on the path stay silent;
//! - otherwise (nothing deeper, or only a suppressed ambiguous terminal) the
//!   current node is judged on its own.
//!
//! So the longest *reportable* terminal on the path speaks. An ambiguous
//! deeper reading does not hide a shorter unique one: with patterns `ca`,
//! `cart` and `card`, the text "car" is ambiguous between the last two and
//! reports `ca` instead.
//!
//! Recursion depth is bounded by the depth of the trie, i.e. by the longest
//! variant, not by the input.

use crate::report::{AmbiguityPolicy, Resolution};
use crate::trie::TrieNode;

/// Matches shorter than this many bytes are never reported.
pub const MIN_MATCH_LEN: usize = 2;

/// Outcome of walking from an anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Walk<'t> {
    /// No terminal of reportable length on the path.
    Miss,
    /// Longest terminal passing the policy ends at `end` (exclusive).
    Reported {
        end: usize,
        resolution: Resolution<'t>,
    },
    /// The policy rejects every terminal on the path; the deepest ends at `end`.
    Suppressed { end: usize },
}

impl Walk<'_> {
    pub fn is_miss(&self) -> bool {
        matches!(self, Walk::Miss)
    }
}

/// Walk `node` (reached after consuming `buffer[anchor..head]`) as deep as
/// the input allows.
pub fn walk<'t>(
    buffer: &[u8],
    anchor: usize,
    head: usize,
    node: &'t TrieNode,
    policy: AmbiguityPolicy,
) -> Walk<'t> {
    let deeper = buffer
        .get(head)
        .and_then(|byte| node.child(byte.to_ascii_lowercase()))
        .map_or(Walk::Miss, |child| walk(buffer, anchor, head + 1, child, policy));
    if let Walk::Reported { .. } = deeper {
        return deeper;
    }

    let current = if head - anchor < MIN_MATCH_LEN {
        Walk::Miss
    } else {
        match Resolution::of(node) {
            Some(resolution) if policy.accepts(&resolution) => Walk::Reported {
                end: head,
                resolution,
            },
            Some(_) => Walk::Suppressed { end: head },
            None => Walk::Miss,
        }
    };
    match current {
        Walk::Reported { .. } => current,
        // keep the deepest suppressed end when nothing here reports
        _ if !deeper.is_miss() => deeper,
        _ => current,
    }
}
