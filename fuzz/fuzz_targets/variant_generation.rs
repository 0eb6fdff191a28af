// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Variant generation on arbitrary patterns.
//!
//! Dictionaries come from users, so patterns can hold anything: combining
//! marks, letters whose lowercase form is longer, lone punctuation. Every
//! strategy has to stay total, and the generated set has to keep its shape.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use fuzztrie::variants::nysiis;
use fuzztrie::{VariantGenerator, VariantOptions};

#[derive(Debug, Arbitrary)]
struct Input {
    pattern: String,
    transpositions: bool,
    deletions: bool,
    duplications: bool,
    phonetic: bool,
    strip_vowels: bool,
    abbreviations: bool,
}

fuzz_target!(|input: Input| {
    let options = VariantOptions {
        transpositions: input.transpositions,
        deletions: input.deletions,
        duplications: input.duplications,
        phonetic: input.phonetic,
        strip_vowels: input.strip_vowels,
        abbreviations: input.abbreviations,
    };
    let variants = VariantGenerator::new(options).generate(&input.pattern);

    let pattern = input.pattern.to_lowercase();
    if pattern.chars().count() > 1 {
        assert!(variants.contains(&pattern), "identity missing for {:?}", pattern);
    }
    for variant in &variants {
        assert!(variant.chars().count() > 1, "short variant {:?}", variant);
    }

    let key = nysiis(&input.pattern);
    assert!(key.bytes().all(|b| b.is_ascii_uppercase()), "bad key {:?}", key);
});
