//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::dictionary::Dictionary;
use crate::report::{AmbiguityPolicy, MatchRecord};
use crate::scan::Scanner;
use crate::trie::PatternTrie;
use crate::variants::{VariantGenerator, VariantOptions};

/// Build a trie from patterns with the default strategies.
pub fn make_trie(patterns: &[&str]) -> PatternTrie {
    make_trie_with(patterns, VariantOptions::default())
}

/// Build a trie from patterns with the given strategies.
pub fn make_trie_with(patterns: &[&str], options: VariantOptions) -> PatternTrie {
    PatternTrie::build(
        &Dictionary::from_patterns(patterns),
        &VariantGenerator::new(options),
    )
}

/// Scan `text` against `patterns` with default settings.
pub fn scan_text(patterns: &[&str], text: &str) -> Vec<MatchRecord> {
    let trie = make_trie(patterns);
    Scanner::new(&trie).matches(text.as_bytes())
}

/// Scan with an explicit ambiguity policy.
pub fn scan_text_with_policy(
    patterns: &[&str],
    text: &str,
    policy: AmbiguityPolicy,
) -> Vec<MatchRecord> {
    let trie = make_trie(patterns);
    Scanner::new(&trie).policy(policy).matches(text.as_bytes())
}

/// `(matched, pattern)` pairs of a scan, for compact assertions.
pub fn matched_pairs(records: &[MatchRecord]) -> Vec<(String, String)> {
    records
        .iter()
        .map(|r| (r.matched.clone(), r.pattern.clone()))
        .collect()
}
