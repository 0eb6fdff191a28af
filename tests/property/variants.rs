//! Property tests for variant generation.
//!
//! For a pattern of n characters:
//! 1. Transposition yields n-1 strings, deletion and duplication n each
//! 2. The identity is always a variant (when longer than one character)
//! 3. No variant is one character or shorter
//! 4. Output is lowercase and deterministic

use proptest::prelude::*;

use fuzztrie::variants::{deletions, duplications, strip_vowels, transpositions};
use fuzztrie::{VariantGenerator, VariantOptions};

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,12}").unwrap()
}

/// Mixed case, spaces and punctuation.
fn phrase_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z .'-]{0,20}").unwrap()
}

fn options_strategy() -> impl Strategy<Value = VariantOptions> {
    any::<[bool; 6]>().prop_map(|b| VariantOptions {
        transpositions: b[0],
        deletions: b[1],
        duplications: b[2],
        phonetic: b[3],
        strip_vowels: b[4],
        abbreviations: b[5],
    })
}

// ============================================================================
// STRATEGY COUNTS
// ============================================================================

proptest! {
    #[test]
    fn prop_edit_counts(word in word_strategy()) {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();
        prop_assert_eq!(transpositions(&chars).len(), n - 1);
        prop_assert_eq!(deletions(&chars).len(), n);
        prop_assert_eq!(duplications(&chars).len(), n);
    }

    #[test]
    fn prop_edit_lengths(word in word_strategy()) {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();
        for t in transpositions(&chars) {
            prop_assert_eq!(t.chars().count(), n);
        }
        for d in deletions(&chars) {
            prop_assert_eq!(d.chars().count(), n - 1);
        }
        for d in duplications(&chars) {
            prop_assert_eq!(d.chars().count(), n + 1);
        }
    }

    #[test]
    fn prop_strip_vowels_leaves_no_vowels(word in phrase_strategy()) {
        let stripped = strip_vowels(&word);
        prop_assert!(!stripped.chars().any(|c| "aeiouAEIOU".contains(c)));
    }
}

// ============================================================================
// GENERATED SET
// ============================================================================

proptest! {
    #[test]
    fn prop_identity_present(word in phrase_strategy(), options in options_strategy()) {
        let pattern = word.to_lowercase();
        let variants = VariantGenerator::new(options).generate(&word);
        if pattern.chars().count() > 1 {
            prop_assert!(variants.contains(&pattern));
        }
    }

    #[test]
    fn prop_nothing_too_short(word in phrase_strategy(), options in options_strategy()) {
        for variant in VariantGenerator::new(options).generate(&word) {
            prop_assert!(variant.chars().count() >= 2, "{:?}", variant);
        }
    }

    #[test]
    fn prop_lowercase_output(word in phrase_strategy()) {
        for variant in VariantGenerator::default().generate(&word) {
            prop_assert_eq!(variant.to_lowercase(), variant);
        }
    }

    #[test]
    fn prop_case_insensitive_input(word in phrase_strategy()) {
        let generator = VariantGenerator::default();
        prop_assert_eq!(
            generator.generate(&word),
            generator.generate(&word.to_uppercase())
        );
    }

    #[test]
    fn prop_more_strategies_never_fewer_variants(word in word_strategy()) {
        let exact = VariantGenerator::new(VariantOptions::exact_only()).generate(&word);
        let all = VariantGenerator::default().generate(&word);
        prop_assert!(exact.is_subset(&all));
    }
}
