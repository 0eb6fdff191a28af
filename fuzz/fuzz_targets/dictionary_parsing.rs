// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dictionary text in either format, straight into a trie.
//!
//! Whatever parses must build, and every parsed pattern longer than one
//! character must then resolve to itself through its own spelling.

#![no_main]

use libfuzzer_sys::fuzz_target;
use fuzztrie::{Dictionary, DictionaryFormat, PatternTrie, VariantGenerator};

fuzz_target!(|text: &str| {
    for format in [DictionaryFormat::Lines, DictionaryFormat::Words] {
        let dictionary = Dictionary::parse(text, format);
        let trie = PatternTrie::build(&dictionary, &VariantGenerator::default());

        for pattern in dictionary.patterns() {
            assert!(!pattern.is_empty());
            if pattern.chars().count() < 2 {
                continue;
            }
            let node = trie.node(pattern).expect("pattern path exists");
            assert!(node.exact().contains(pattern), "{:?} not exact", pattern);
        }
    }
});
