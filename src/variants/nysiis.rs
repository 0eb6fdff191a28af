// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! NYSIIS phonetic key.
//!
//! The New York State Identification and Intelligence System code maps
//! words that sound alike onto the same short key: vowels collapse to `A`,
//! common consonant clusters (`MAC`, `KN`, `PH`, `SCH`, ...) are rewritten,
//! and runs of the same sound are written once. "macintosh" and "mackintosh"
//! both become `MCANT`.
//!
//! Only ASCII letters take part; everything else is dropped before encoding.
//! The key is not truncated.

fn is_vowel(b: u8) -> bool {
    matches!(b, b'A' | b'E' | b'I' | b'O' | b'U')
}

/// Compute the NYSIIS key of `word` (uppercase). Empty when `word` has no
/// ASCII letters.
pub fn nysiis(word: &str) -> String {
    let mut name: Vec<u8> = word
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase())
        .collect();
    if name.is_empty() {
        return String::new();
    }

    translate_prefix(&mut name);
    translate_suffix(&mut name);

    let mut key = vec![name[0]];
    for i in 1..name.len() {
        let prev = name[i - 1];
        let next = name.get(i + 1).copied();
        match name[i] {
            b'E' if next == Some(b'V') => {
                name[i] = b'A';
                name[i + 1] = b'F';
            }
            b'A' | b'E' | b'I' | b'O' | b'U' => name[i] = b'A',
            b'Q' => name[i] = b'G',
            b'Z' => name[i] = b'S',
            b'M' => name[i] = b'N',
            b'K' => name[i] = if next == Some(b'N') { b'N' } else { b'C' },
            b'S' if name[i + 1..].starts_with(b"CH") => {
                name[i + 1] = b'S';
                name[i + 2] = b'S';
            }
            b'P' if next == Some(b'H') => {
                name[i] = b'F';
                name[i + 1] = b'F';
            }
            b'H' if !is_vowel(prev) || !next.is_some_and(is_vowel) => name[i] = prev,
            b'W' if is_vowel(prev) => name[i] = prev,
            _ => {}
        }
        if key.last() != Some(&name[i]) {
            key.push(name[i]);
        }
    }

    if key.len() > 1 && key.last() == Some(&b'S') {
        key.pop();
    }
    if key.ends_with(b"AY") {
        key.remove(key.len() - 2);
    }
    if key.len() > 1 && key.last() == Some(&b'A') {
        key.pop();
    }

    // Every byte is an ASCII uppercase letter
    key.into_iter().map(char::from).collect()
}

fn translate_prefix(name: &mut [u8]) {
    let replacements: [(&[u8], &[u8]); 6] = [
        (b"MAC", b"MCC"),
        (b"KN", b"NN"),
        (b"K", b"C"),
        (b"PH", b"FF"),
        (b"PF", b"FF"),
        (b"SCH", b"SSS"),
    ];
    for (from, to) in replacements {
        if name.starts_with(from) {
            name[..from.len()].copy_from_slice(to);
            return;
        }
    }
}

fn translate_suffix(name: &mut Vec<u8>) {
    if name.ends_with(b"EE") || name.ends_with(b"IE") {
        name.truncate(name.len() - 2);
        name.push(b'Y');
        return;
    }
    for suffix in [b"DT", b"RT", b"RD", b"NT", b"ND"] {
        if name.ends_with(suffix) {
            name.truncate(name.len() - 2);
            name.push(b'D');
            return;
        }
    }
}
