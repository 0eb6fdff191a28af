// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Abbreviations for multi-word patterns: acronyms and contractions.
//!
//! "massachusetts institute of technology" is written "MIT", "M.I.T." or
//! "Mass. Inst. Techn." at least as often as in full. Stop words are dropped
//! first; what remains must be more than one word, otherwise nothing is
//! produced.

use crate::classify::Classifier;

/// Words skipped when building abbreviations.
pub const STOP_WORDS: &[&str] = &["of", "in", "for"];

/// Acronyms and contractions of `pattern`, or nothing for single-word patterns.
pub fn abbreviations(pattern: &str, classifier: &Classifier) -> Vec<String> {
    let words: Vec<&str> = pattern
        .split_whitespace()
        .filter(|w| !STOP_WORDS.contains(w))
        .collect();
    if words.len() < 2 {
        return Vec::new();
    }

    let initials: Vec<String> = words
        .iter()
        .filter_map(|w| w.chars().next())
        .map(String::from)
        .collect();
    let short: Vec<String> = words
        .iter()
        .map(|w| contraction(w, classifier).to_string())
        .collect();

    vec![
        initials.concat(),
        initials.join(" "),
        format!("{}.", initials.join(".")),
        format!("{}.", initials.join(". ")),
        short.join(" "),
        format!("{}.", short.join(".")),
        format!("{}.", short.join(". ")),
    ]
}

/// Cut `word` after its second vowel group: leading consonants, then
/// vowels, then consonants. "massachusetts" → "mass", "institute" → "inst".
pub fn contraction<'a>(word: &'a str, classifier: &Classifier) -> &'a str {
    let bytes = word.as_bytes();
    let mut end = 0;
    while end < bytes.len() && classifier.is_consonant(bytes[end]) {
        end += 1;
    }
    while end < bytes.len() && classifier.is_vowel(bytes[end]) {
        end += 1;
    }
    while end < bytes.len() && classifier.is_consonant(bytes[end]) {
        end += 1;
    }
    // Letters are ASCII, so `end` always lands on a char boundary
    &word[..end]
}
