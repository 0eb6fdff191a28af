// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-edit spellings: transposition, deletion, duplication, vowel stripping.
//!
//! Each function returns every candidate it produces, duplicates included,
//! so the counts stay predictable: for `n` characters, `n - 1` transpositions,
//! `n` deletions, `n` duplications. The caller collapses them into a set.

/// Swap each adjacent pair `(i - 1, i)` once. Swaps do not accumulate.
pub fn transpositions(chars: &[char]) -> Vec<String> {
    let mut letters = chars.to_vec();
    let mut out = Vec::with_capacity(chars.len().saturating_sub(1));
    for i in 1..letters.len() {
        letters.swap(i - 1, i);
        out.push(letters.iter().collect());
        letters.swap(i - 1, i);
    }
    out
}

/// Drop the character at each position.
pub fn deletions(chars: &[char]) -> Vec<String> {
    (0..chars.len())
        .map(|i| chars[..i].iter().chain(&chars[i + 1..]).collect())
        .collect()
}

/// Double the character at each position.
pub fn duplications(chars: &[char]) -> Vec<String> {
    (0..chars.len())
        .map(|i| {
            chars[..i]
                .iter()
                .chain(std::iter::once(&chars[i]))
                .chain(&chars[i..])
                .collect()
        })
        .collect()
}

/// Remove `a e i o u` in either case. `y` is kept.
pub fn strip_vowels(pattern: &str) -> String {
    pattern
        .chars()
        .filter(|c| !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .collect()
}
