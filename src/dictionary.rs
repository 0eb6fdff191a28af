// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dictionary ingestion.
//!
//! Two formats. `lines` (the default) holds one pattern per line, so patterns
//! may contain spaces ("new york city"), and a line may declare aliases after
//! the canonical form: `new york city|nyc|big apple`. `words` splits the
//! whole file on whitespace, one pattern per word; a word may carry aliases
//! the same way (`colour|color`).
//!
//! Everything is trimmed and lowercased; blank entries are skipped. Bytes
//! that are not valid UTF-8 are replaced rather than failing the file.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Separator between a canonical pattern and its declared aliases.
pub const ALIAS_SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryFormat {
    /// One pattern per line, optional `|`-separated aliases.
    #[default]
    Lines,
    /// Whitespace-separated patterns, optional `|`-separated aliases.
    Words,
}

/// A canonical pattern and the spellings declared for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub pattern: String,
    pub aliases: Vec<String>,
}

impl Entry {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            aliases: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<Entry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patterns given directly, lowercased, blanks skipped.
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .map(Entry::new)
            .collect();
        Self { entries }
    }

    pub fn parse(text: &str, format: DictionaryFormat) -> Self {
        match format {
            DictionaryFormat::Words => Self {
                entries: text.split_whitespace().filter_map(parse_line).collect(),
            },
            DictionaryFormat::Lines => Self {
                entries: text.lines().filter_map(parse_line).collect(),
            },
        }
    }

    /// Read and parse a dictionary file.
    ///
    /// A file that cannot be read, or that holds no patterns, is an error
    /// naming the file.
    pub fn load(path: impl AsRef<Path>, format: DictionaryFormat) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::Ingest {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = text {
            log::warn!("{}: invalid UTF-8 replaced", path.display());
        }
        let dictionary = Self::parse(&text, format);
        if dictionary.is_empty() {
            return Err(Error::EmptyDictionary {
                path: path.to_path_buf(),
            });
        }
        log::info!("loaded {} patterns from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    /// Load every file, logging and skipping the ones that fail.
    pub fn load_all<P: AsRef<Path>>(paths: &[P], format: DictionaryFormat) -> Self {
        let mut dictionary = Self::new();
        for path in paths {
            match Self::load(path, format) {
                Ok(loaded) => dictionary.extend(loaded),
                Err(e) => log::error!("{}", e),
            }
        }
        dictionary
    }

    pub fn extend(&mut self, other: Dictionary) {
        self.entries.extend(other.entries);
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.pattern.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_line(line: &str) -> Option<Entry> {
    let mut parts = line
        .split(ALIAS_SEPARATOR)
        .map(|part| part.trim().to_lowercase());
    let pattern = parts.next().filter(|p| !p.is_empty());
    let Some(pattern) = pattern else {
        if !line.trim().is_empty() {
            log::warn!("skipping dictionary line without a pattern: {:?}", line);
        }
        return None;
    };
    let aliases = parts.filter(|a| !a.is_empty()).collect();
    Some(Entry { pattern, aliases })
}
