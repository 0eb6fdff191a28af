// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzztrie command-line interface.
//!
//! Two subcommands: `scan` to find dictionary patterns in a text file, and
//! `variants` to show what each pattern expands into. Both read one or more
//! dictionaries; a dictionary that fails to load is reported and skipped.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use fuzztrie::{AmbiguityPolicy, Config, DictionaryFormat};

#[derive(Parser)]
#[command(
    name = "fuzztrie",
    about = "Fuzzy multi-pattern text matching over a trie of spelling variants",
    version
)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report every place in TEXT where a pattern variant resolves uniquely
    ///
    /// Output is one line per match: row,column,offset,matched,pattern
    Scan {
        /// File to search
        text: PathBuf,

        #[command(flatten)]
        dictionary: DictionaryArgs,

        /// What to do when a match could be more than one pattern
        #[arg(long, value_enum)]
        policy: Option<AmbiguityPolicy>,

        /// Scan shards of the input in parallel
        #[arg(long)]
        parallel: bool,

        /// Bytes per shard when scanning in parallel
        #[arg(long)]
        shard_size: Option<usize>,
    },

    /// Print the variants generated for every dictionary pattern
    Variants {
        #[command(flatten)]
        dictionary: DictionaryArgs,

        /// Print a JSON object mapping each pattern to its variants
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by every subcommand that reads dictionaries.
#[derive(Args)]
pub struct DictionaryArgs {
    /// Dictionary file (repeatable)
    #[arg(short, long = "dictionary", required = true)]
    pub dictionaries: Vec<PathBuf>,

    /// Dictionary layout
    #[arg(long, value_enum)]
    pub format: Option<DictionaryFormat>,

    /// Shorthand for --format words
    #[arg(long, conflicts_with = "format")]
    pub words: bool,

    /// Also generate acronyms and contractions of multi-word patterns
    #[arg(long)]
    pub abbreviations: bool,

    /// JSON config file; flags given here override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl DictionaryArgs {
    /// Apply these flags on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.words {
            config.format = DictionaryFormat::Words;
        }
        if self.abbreviations {
            config.variants.abbreviations = true;
        }
    }
}
