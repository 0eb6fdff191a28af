// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy spelling generation.
//!
//! A pattern is not searched for directly. Instead we write down the ways a
//! person is likely to misspell it and put all of those into the trie:
//!
//! | Strategy      | "hello" produces                 |
//! |---------------|----------------------------------|
//! | identity      | hello                            |
//! | transposition | ehllo, hlelo, helol              |
//! | deletion      | ello, hllo, helo, hell           |
//! | duplication   | hhello, heello, helllo, helloo   |
//! | phonetic      | hal (NYSIIS)                     |
//! | vowel strip   | hll                              |
//!
//! Strategies run independently on the lowercased pattern and their outputs
//! are unioned. Anything one character or shorter is discarded: a single
//! letter matches too much text to point at any one pattern.
//!
//! Abbreviations (acronyms, contractions) are available for multi-word
//! patterns but are off unless [`VariantOptions::abbreviations`] is set.

pub mod edits;
pub mod nysiis;
pub mod shorten;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::classify::{Classifier, CLASSIFIER};

pub use edits::{deletions, duplications, strip_vowels, transpositions};
pub use nysiis::nysiis;
pub use shorten::{abbreviations, contraction, STOP_WORDS};

/// Variants of this many characters or fewer are never produced.
pub const MAX_DISCARDED_LEN: usize = 1;

/// Separator used by [`VariantGenerator::describe`].
pub const DESCRIBE_SEPARATOR: &str = " OR ";

/// Which strategies run. Every required strategy is on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantOptions {
    pub transpositions: bool,
    pub deletions: bool,
    pub duplications: bool,
    pub phonetic: bool,
    pub strip_vowels: bool,
    pub abbreviations: bool,
}

impl Default for VariantOptions {
    fn default() -> Self {
        Self {
            transpositions: true,
            deletions: true,
            duplications: true,
            phonetic: true,
            strip_vowels: true,
            abbreviations: false,
        }
    }
}

impl VariantOptions {
    /// Only the identity variant.
    pub fn exact_only() -> Self {
        Self {
            transpositions: false,
            deletions: false,
            duplications: false,
            phonetic: false,
            strip_vowels: false,
            abbreviations: false,
        }
    }
}

/// Produces the fuzzy variant set of a pattern.
#[derive(Debug, Clone, Copy)]
pub struct VariantGenerator<'c> {
    options: VariantOptions,
    classifier: &'c Classifier,
}

impl Default for VariantGenerator<'static> {
    fn default() -> Self {
        Self::new(VariantOptions::default())
    }
}

impl VariantGenerator<'static> {
    pub fn new(options: VariantOptions) -> Self {
        Self::with_classifier(options, &CLASSIFIER)
    }
}

impl<'c> VariantGenerator<'c> {
    pub fn with_classifier(options: VariantOptions, classifier: &'c Classifier) -> Self {
        Self {
            options,
            classifier,
        }
    }

    pub fn options(&self) -> &VariantOptions {
        &self.options
    }

    /// All variants of `pattern`, lowercased, longer than one character.
    ///
    /// The empty pattern has no variants. A one-character pattern is only
    /// run through the strategies whose positions exist; its identity is
    /// filtered out like any other single character.
    pub fn generate(&self, pattern: &str) -> BTreeSet<String> {
        let pattern = pattern.to_lowercase();
        let chars: Vec<char> = pattern.chars().collect();
        if chars.is_empty() {
            return BTreeSet::new();
        }

        let mut variants = BTreeSet::new();
        variants.insert(pattern.clone());
        if self.options.transpositions {
            variants.extend(transpositions(&chars));
        }
        if self.options.deletions {
            variants.extend(deletions(&chars));
        }
        if self.options.duplications {
            variants.extend(duplications(&chars));
        }
        if self.options.phonetic {
            variants.insert(nysiis(&pattern).to_lowercase());
        }
        if self.options.strip_vowels {
            variants.insert(strip_vowels(&pattern));
        }
        if self.options.abbreviations {
            variants.extend(abbreviations(&pattern, self.classifier));
        }

        variants.retain(|v| v.chars().count() > MAX_DISCARDED_LEN);
        log::trace!("{} variants of {:?}", variants.len(), pattern);
        variants
    }

    /// The variant set joined with `" OR "`, for diagnostics.
    pub fn describe(&self, pattern: &str) -> String {
        self.generate(pattern)
            .into_iter()
            .collect::<Vec<_>>()
            .join(DESCRIBE_SEPARATOR)
    }
}
