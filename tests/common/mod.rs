//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::BTreeSet;

// Re-export canonical test utilities from fuzztrie::testing
pub use fuzztrie::testing::{make_trie, make_trie_with, matched_pairs, scan_text};

// ============================================================================
// FIXTURES
// ============================================================================

/// Small dictionary of university names, one per line, with aliases.
pub const UNIVERSITIES: &str = "\
Massachusetts Institute of Technology|MIT
University of Pennsylvania|upenn
Stanford University
Carnegie Mellon University|cmu
";

/// Free text mentioning the universities above, with typos.
pub const UNIVERSITY_TEXT: &str = "\
She studied at the Massachusets Institute of Technology, then moved to
Stanfrod University. Her brother went to CMU; her cousin to UPenn.
";

/// Words that share many variants with each other.
pub const CROWDED: &[&str] = &["cat", "cot", "car", "cart", "coat", "cast"];

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Set of `String` from string slices.
pub fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Patterns reported by scanning `text`, in order.
pub fn reported_patterns(patterns: &[&str], text: &str) -> Vec<String> {
    scan_text(patterns, text)
        .into_iter()
        .map(|r| r.pattern)
        .collect()
}
