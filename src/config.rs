// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matcher configuration.
//!
//! Every field has a default, so a config file only names what it changes:
//!
//! ```json
//! {
//!   "variants": { "abbreviations": true, "phonetic": false },
//!   "policy": "report-all",
//!   "format": "words",
//!   "parallel": true,
//!   "shard_size": 65536
//! }
//! ```
//!
//! Command-line flags are applied on top of the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryFormat;
use crate::error::{Error, Result};
use crate::report::AmbiguityPolicy;
use crate::variants::VariantOptions;

/// Bytes per scan shard when none is configured.
pub const DEFAULT_SHARD_SIZE: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub variants: VariantOptions,
    pub policy: AmbiguityPolicy,
    pub format: DictionaryFormat,
    /// Build and scan with rayon (ignored without the `parallel` feature).
    pub parallel: bool,
    pub shard_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variants: VariantOptions::default(),
            policy: AmbiguityPolicy::default(),
            format: DictionaryFormat::default(),
            parallel: false,
            shard_size: DEFAULT_SHARD_SIZE,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
