//! Property tests for trie construction.
//!
//! 1. Every pattern resolves to itself through its own spelling
//! 2. Every generated variant leads back to its pattern
//! 3. Build order, duplication and parallelism do not change the trie

use proptest::prelude::*;

use fuzztrie::{Dictionary, PatternTrie, Resolution, VariantGenerator};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..12)
}

fn build(patterns: &[String]) -> PatternTrie {
    PatternTrie::build(
        &Dictionary::from_patterns(patterns),
        &VariantGenerator::default(),
    )
}

proptest! {
    #[test]
    fn prop_exact_spelling_resolves(patterns in dictionary_strategy()) {
        let trie = build(&patterns);
        for pattern in &patterns {
            let node = trie.node(pattern);
            prop_assert!(node.is_some());
            let node = node.unwrap();
            prop_assert!(node.exact().contains(pattern));
            prop_assert!(trie.lookup(pattern).is_some_and(|t| t.contains(pattern)));
            // Distinct patterns never share an exact spelling
            prop_assert_eq!(Resolution::of(node), Some(Resolution::Unique(pattern.as_str())));
        }
    }

    #[test]
    fn prop_variants_lead_back(patterns in dictionary_strategy()) {
        let trie = build(&patterns);
        let generator = VariantGenerator::default();
        for pattern in &patterns {
            for variant in generator.generate(pattern) {
                let terminal = trie.lookup(&variant);
                prop_assert!(
                    terminal.is_some_and(|t| t.contains(pattern)),
                    "{:?} does not lead to {:?}", variant, pattern
                );
            }
        }
    }

    #[test]
    fn prop_order_independent(patterns in dictionary_strategy()) {
        let mut reversed = patterns.clone();
        reversed.reverse();
        prop_assert_eq!(build(&patterns), build(&reversed));
    }

    #[test]
    fn prop_duplicates_ignored(patterns in dictionary_strategy()) {
        let mut doubled = patterns.clone();
        doubled.extend(patterns.iter().cloned());
        prop_assert_eq!(build(&patterns), build(&doubled));
    }

    #[test]
    fn prop_merge_is_union(left in dictionary_strategy(), right in dictionary_strategy()) {
        let mut merged = build(&left);
        merged.merge(build(&right));
        let joint: Vec<String> = left.iter().chain(&right).cloned().collect();
        prop_assert_eq!(merged, build(&joint));
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #[test]
    fn prop_parallel_build_matches(patterns in dictionary_strategy()) {
        let dictionary = Dictionary::from_patterns(&patterns);
        let generator = VariantGenerator::default();
        prop_assert_eq!(
            PatternTrie::build_parallel(&dictionary, &generator),
            PatternTrie::build(&dictionary, &generator)
        );
    }
}
