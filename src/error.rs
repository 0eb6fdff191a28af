// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Ingestion errors are recoverable: the caller may skip a bad dictionary and
//! keep building from the others. Scan errors (input unreadable, output
//! closed) abort the scan; records already written stay written.
//!
//! Variant generation has no error type. Empty patterns are filtered during
//! ingestion and every strategy is total on non-empty input.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Dictionary file missing or unreadable.
    #[error("failed to ingest dictionary {}: {source}", path.display())]
    Ingest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Dictionary file read fine but held no patterns.
    #[error("dictionary {} contains no patterns", path.display())]
    EmptyDictionary { path: PathBuf },

    /// Search input missing or unreadable.
    #[error("failed to read search input {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a match record failed (closed pipe, full disk).
    #[error("failed to write match output: {0}")]
    Write(#[from] io::Error),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Ingestion failures leave the engine usable; everything else is fatal.
    pub fn is_ingestion(&self) -> bool {
        matches!(self, Error::Ingest { .. } | Error::EmptyDictionary { .. })
    }
}
