// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy multi-pattern matching over a shared trie of spelling variants.
//!
//! Given a dictionary of patterns, every pattern is expanded into the ways it
//! is likely to be misspelled (transpositions, deletions, duplications, a
//! NYSIIS phonetic key, the pattern without vowels). All variants of all
//! patterns go into one prefix tree. A single left-to-right scan of the text
//! then walks the tree from the start of every letter run and reports each
//! place where the longest variant found resolves to exactly one pattern.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │ dictionary.rs│────▶│  variants/    │────▶│   trie.rs    │   build, once
//! │ (Dictionary) │     │ (generate)    │     │ (PatternTrie)│
//! └──────────────┘     └───────────────┘     └──────┬───────┘
//!                                                   │
//!        ┌──────────────┐     ┌──────────────┐      ▼
//!        │ classify.rs  │────▶│    scan/     │────▶ report.rs       scan, streaming
//!        │ (Classifier) │     │ (Scanner)    │     (MatchRecord)
//!        └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use fuzztrie::{Dictionary, PatternTrie, Scanner, VariantGenerator};
//!
//! let dictionary = Dictionary::from_patterns(["hello"]);
//! let trie = PatternTrie::build(&dictionary, &VariantGenerator::default());
//!
//! let records = Scanner::new(&trie).matches(b"say helo world");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].to_string(), "1,5,4,helo,hello");
//! ```

pub mod classify;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod report;
pub mod scan;
pub mod testing;
pub mod trie;
pub mod variants;

// Re-exports for public API
pub use classify::{CharClass, Classifier, CLASSIFIER};
pub use config::Config;
pub use dictionary::{Dictionary, DictionaryFormat, Entry};
pub use error::{Error, Result};
pub use report::{AmbiguityPolicy, MatchRecord, MatchReporter, MatchSink, Resolution};
pub use scan::{Anchors, Position, Scanner, Walk, MIN_MATCH_LEN};
pub use trie::{PatternTrie, TrieNode};
pub use variants::{VariantGenerator, VariantOptions};

/// Build a trie from `dictionary` using the configured strategies, in
/// parallel when the config asks for it and the feature is enabled.
pub fn build_trie(dictionary: &Dictionary, config: &Config) -> PatternTrie {
    build_trie_with(dictionary, config, || {})
}

/// [`build_trie`], calling `on_entry` once per dictionary entry inserted.
pub fn build_trie_with(
    dictionary: &Dictionary,
    config: &Config,
    on_entry: impl Fn() + Sync,
) -> PatternTrie {
    let generator = VariantGenerator::new(config.variants);
    #[cfg(feature = "parallel")]
    if config.parallel {
        return PatternTrie::build_parallel_with(dictionary, &generator, on_entry);
    }
    PatternTrie::build_with(dictionary, &generator, on_entry)
}

/// Scan `buffer`, reporting into `sink` per the config's policy and
/// parallelism. Returns the number of records reported.
pub fn scan_buffer(
    trie: &PatternTrie,
    buffer: &[u8],
    config: &Config,
    sink: &mut impl MatchSink,
) -> Result<usize> {
    let scanner = Scanner::new(trie).policy(config.policy);
    #[cfg(feature = "parallel")]
    if config.parallel {
        return scanner.scan_parallel(buffer, config.shard_size, sink);
    }
    scanner.scan(buffer, sink)
}
