// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use fuzztrie::{Config, Dictionary, MatchReporter, PatternTrie, VariantGenerator};

mod cli;
use cli::{Cli, Commands, DictionaryArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Scan {
            text,
            dictionary,
            policy,
            parallel,
            shard_size,
        } => {
            let mut config = load_config(&dictionary)?;
            if let Some(policy) = policy {
                config.policy = policy;
            }
            if parallel {
                config.parallel = true;
            }
            if let Some(shard_size) = shard_size {
                config.shard_size = shard_size;
            }
            run_scan(&text, &dictionary, &config)
        }
        Commands::Variants { dictionary, json } => {
            let config = load_config(&dictionary)?;
            run_variants(&dictionary, &config, json)
        }
    }
}

fn load_config(args: &DictionaryArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    args.apply(&mut config);
    Ok(config)
}

/// Load every dictionary, skipping the ones that fail. Having no patterns at
/// all is fatal.
fn load_dictionaries(args: &DictionaryArgs, config: &Config) -> Result<Dictionary> {
    let dictionary = Dictionary::load_all(&args.dictionaries, config.format);
    if dictionary.is_empty() {
        bail!(
            "no patterns loaded from {} dictionar{}",
            args.dictionaries.len(),
            if args.dictionaries.len() == 1 { "y" } else { "ies" }
        );
    }
    Ok(dictionary)
}

fn run_scan(text: &Path, args: &DictionaryArgs, config: &Config) -> Result<()> {
    let dictionary = load_dictionaries(args, config)?;
    let trie = build(&dictionary, config);

    let buffer = fs::read(text).map_err(|source| fuzztrie::Error::ReadInput {
        path: text.to_path_buf(),
        source,
    })?;

    let stdout = io::stdout();
    let mut reporter = MatchReporter::new(stdout.lock());
    let reported = fuzztrie::scan_buffer(&trie, &buffer, config, &mut reporter)
        .with_context(|| format!("scan of {} aborted", text.display()))?;
    log::info!("{} matches in {} bytes", reported, buffer.len());
    Ok(())
}

fn run_variants(args: &DictionaryArgs, config: &Config, json: bool) -> Result<()> {
    let dictionary = load_dictionaries(args, config)?;
    let generator = VariantGenerator::new(config.variants);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let table: BTreeMap<&str, Vec<String>> = dictionary
            .patterns()
            .map(|p| (p, generator.generate(p).into_iter().collect()))
            .collect();
        serde_json::to_writer_pretty(&mut out, &table).context("failed to write variants")?;
        writeln!(out)?;
    } else {
        for pattern in dictionary.patterns() {
            writeln!(out, "{}: {}", pattern, generator.describe(pattern))?;
        }
    }
    Ok(())
}

/// Build the trie, with a progress bar when stderr is a terminal.
#[cfg(feature = "parallel")]
fn build(dictionary: &Dictionary, config: &Config) -> PatternTrie {
    if !atty::is(atty::Stream::Stderr) {
        return fuzztrie::build_trie(dictionary, config);
    }

    let progress = ProgressBar::new(dictionary.len() as u64);
    progress.set_style(create_progress_style());
    progress.set_prefix("Building");
    progress.set_message("patterns...");

    let trie = fuzztrie::build_trie_with(dictionary, config, || progress.inc(1));

    progress.finish_with_message(format!(
        "{} patterns │ {} variants │ {} nodes",
        dictionary.len(),
        trie.terminal_count(),
        trie.node_count()
    ));
    trie
}

#[cfg(not(feature = "parallel"))]
fn build(dictionary: &Dictionary, config: &Config) -> PatternTrie {
    fuzztrie::build_trie(dictionary, config)
}

/// Create a progress style for the build progress bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .map(|style| style.progress_chars("━━╸"))
    .unwrap_or_else(|_| ProgressStyle::default_bar())
}
