// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scanning arbitrary bytes.
//!
//! Search input is not guaranteed to be text at all. The scanner must never
//! panic, every record must point at a real anchor, and the sharded scan must
//! agree with the sequential one byte for byte.

#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use fuzztrie::{
    Dictionary, MatchRecord, PatternTrie, Position, Scanner, VariantGenerator, CLASSIFIER,
};

const PATTERNS: &[&str] = &[
    "hello", "world", "cat", "cot", "car", "new york", "o'neil", "ab",
];

fuzz_target!(|data: &[u8]| {
    static TRIE: OnceLock<PatternTrie> = OnceLock::new();
    let trie = TRIE.get_or_init(|| {
        PatternTrie::build(
            &Dictionary::from_patterns(PATTERNS),
            &VariantGenerator::default(),
        )
    });

    let scanner = Scanner::new(trie);
    let records = scanner.matches(data);
    for record in &records {
        let offset = record.offset;
        assert!(CLASSIFIER.is_letter(data[offset]));
        assert!(offset == 0 || !CLASSIFIER.is_letter(data[offset - 1]));
        let position = Position::at(data, offset);
        assert_eq!((record.row, record.column), (position.row, position.column));
    }

    let shard_size = data.first().map_or(1, |&b| usize::from(b) + 1);
    let mut sharded: Vec<MatchRecord> = Vec::new();
    let _ = scanner.scan_parallel(data, shard_size, &mut sharded);
    assert_eq!(sharded, records);
});
