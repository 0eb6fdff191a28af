// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Byte classification: vowel, consonant, or neither.
//!
//! Every other component asks the same question many times per input byte:
//! is this a letter, and which kind? A 256-entry table answers in one load.
//! The table is a `const`, so there is no runtime initialization step and no
//! global mutation; callers borrow [`CLASSIFIER`] or build their own with
//! [`Classifier::ascii`].
//!
//! `y` counts as a vowel. Anything outside ASCII letters (digits, punctuation,
//! whitespace, UTF-8 continuation bytes) is [`CharClass::Neither`].

/// Letter class of a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Vowel,
    Consonant,
    Neither,
}

/// Lookup table mapping every byte value to its [`CharClass`].
#[derive(Debug, Clone)]
pub struct Classifier {
    table: [CharClass; 256],
}

const VOWELS: &[u8] = b"aeiouy";

/// Process-wide ASCII classifier, built at compile time.
pub static CLASSIFIER: Classifier = Classifier::ascii();

impl Classifier {
    /// Build the ASCII table: `aeiouy` (either case) are vowels, other ASCII
    /// letters consonants.
    pub const fn ascii() -> Self {
        let mut table = [CharClass::Neither; 256];
        let mut b = 0usize;
        while b < 256 {
            let byte = b as u8;
            if byte.is_ascii_alphabetic() {
                let lower = byte.to_ascii_lowercase();
                let mut is_vowel = false;
                let mut v = 0;
                while v < VOWELS.len() {
                    if VOWELS[v] == lower {
                        is_vowel = true;
                    }
                    v += 1;
                }
                table[b] = if is_vowel {
                    CharClass::Vowel
                } else {
                    CharClass::Consonant
                };
            }
            b += 1;
        }
        Self { table }
    }

    #[inline]
    pub fn classify(&self, byte: u8) -> CharClass {
        self.table[byte as usize]
    }

    /// Classify a `char`. Non-ASCII characters are always `Neither`.
    #[inline]
    pub fn classify_char(&self, c: char) -> CharClass {
        if c.is_ascii() {
            self.classify(c as u8)
        } else {
            CharClass::Neither
        }
    }

    #[inline]
    pub fn is_vowel(&self, byte: u8) -> bool {
        self.classify(byte) == CharClass::Vowel
    }

    #[inline]
    pub fn is_consonant(&self, byte: u8) -> bool {
        self.classify(byte) == CharClass::Consonant
    }

    /// Vowel or consonant. Letter runs, and therefore anchors, are built from these.
    #[inline]
    pub fn is_letter(&self, byte: u8) -> bool {
        self.classify(byte) != CharClass::Neither
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::ascii()
    }
}
