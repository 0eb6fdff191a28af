// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared prefix tree over every variant of every pattern.
//!
//! Building the trie is the only time we pay for fuzziness. Each pattern
//! contributes a dozen or so variants; all of them go into one tree keyed by
//! bytes, and each node where a variant ends remembers which canonical
//! patterns it stands for. The scanner then walks this tree once per letter
//! run and never thinks about edit operations again.
//!
//! ```text
//! dictionary: cat, cot
//!
//! (root) ─ c ─ a ─ t      {cat}        exact {cat}
//!          │   └─ ...
//!          ├─ o ─ t       {cot}        exact {cot}
//!          └─ t           {cat, cot}   (deletion and vowel strip of both)
//! ```
//!
//! Each node keeps two sets. The *terminal set* is every pattern any variant
//! ending here resolves to. The *exact set* is the subset whose pattern (or
//! declared alias) is spelled exactly by the path from the root, so a literal
//! occurrence of a pattern still resolves when some other pattern's variant
//! collides with it.
//!
//! Keys are ASCII case-folded bytes. Non-ASCII bytes are stored as they are.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::dictionary::{Dictionary, Entry};
use crate::variants::{VariantGenerator, MAX_DISCARDED_LEN};

/// One node of the [`PatternTrie`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: BTreeMap<u8, TrieNode>,
    terminal: BTreeSet<String>,
    exact: BTreeSet<String>,
}

impl TrieNode {
    /// Child reached by `byte` (already case-folded).
    #[inline]
    pub fn child(&self, byte: u8) -> Option<&TrieNode> {
        self.children.get(&byte)
    }

    pub fn children(&self) -> impl Iterator<Item = (u8, &TrieNode)> {
        self.children.iter().map(|(b, n)| (*b, n))
    }

    /// Canonical patterns of every variant ending here, or `None`.
    pub fn terminal(&self) -> Option<&BTreeSet<String>> {
        (!self.terminal.is_empty()).then_some(&self.terminal)
    }

    /// Canonical patterns spelled exactly by this node's path.
    pub fn exact(&self) -> &BTreeSet<String> {
        &self.exact
    }

    pub fn is_terminal(&self) -> bool {
        !self.terminal.is_empty()
    }

    fn merge(&mut self, other: TrieNode) {
        self.terminal.extend(other.terminal);
        self.exact.extend(other.exact);
        for (byte, child) in other.children {
            match self.children.get_mut(&byte) {
                Some(existing) => existing.merge(child),
                None => {
                    self.children.insert(byte, child);
                }
            }
        }
    }

    fn count_nodes(&self) -> usize {
        1 + self.children.values().map(TrieNode::count_nodes).sum::<usize>()
    }

    fn count_terminals(&self) -> usize {
        usize::from(self.is_terminal())
            + self
                .children
                .values()
                .map(TrieNode::count_terminals)
                .sum::<usize>()
    }
}

/// Byte-keyed prefix tree mapping variant spellings to canonical patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternTrie {
    root: TrieNode,
}

impl PatternTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a dictionary: every generated variant of every pattern,
    /// plus the pattern itself and its declared aliases as exact spellings.
    pub fn build(dictionary: &Dictionary, generator: &VariantGenerator<'_>) -> Self {
        Self::build_with(dictionary, generator, || {})
    }

    /// [`build`](Self::build), calling `on_entry` after each entry is inserted.
    pub fn build_with(
        dictionary: &Dictionary,
        generator: &VariantGenerator<'_>,
        on_entry: impl Fn(),
    ) -> Self {
        let mut trie = Self::new();
        for entry in dictionary.entries() {
            trie.insert_entry(entry, generator);
            on_entry();
        }
        log::info!(
            "built trie from {} patterns: {} nodes, {} terminals",
            dictionary.len(),
            trie.node_count(),
            trie.terminal_count()
        );
        trie
    }

    /// Parallel [`build`](Self::build): per-thread tries merged at the end.
    ///
    /// Set semantics make the merge order irrelevant, so the result is equal
    /// to the sequential build.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(dictionary: &Dictionary, generator: &VariantGenerator<'_>) -> Self {
        Self::build_parallel_with(dictionary, generator, || {})
    }

    /// [`build_parallel`](Self::build_parallel), calling `on_entry` from the
    /// worker thread after each entry is inserted.
    #[cfg(feature = "parallel")]
    pub fn build_parallel_with(
        dictionary: &Dictionary,
        generator: &VariantGenerator<'_>,
        on_entry: impl Fn() + Sync,
    ) -> Self {
        let trie = dictionary
            .entries()
            .par_iter()
            .fold(PatternTrie::new, |mut trie, entry| {
                trie.insert_entry(entry, generator);
                on_entry();
                trie
            })
            .reduce(PatternTrie::new, |mut left, right| {
                left.merge(right);
                left
            });
        log::info!(
            "built trie from {} patterns in parallel: {} nodes, {} terminals",
            dictionary.len(),
            trie.node_count(),
            trie.terminal_count()
        );
        trie
    }

    /// Insert one dictionary entry. Canonical patterns are stored lowercase.
    ///
    /// Spellings of one character never enter the trie, the pattern itself
    /// included, since no match can be that short.
    pub fn insert_entry(&mut self, entry: &Entry, generator: &VariantGenerator<'_>) {
        let canonical = entry.pattern.to_lowercase();
        if canonical.is_empty() {
            return;
        }
        let variants = generator.generate(&canonical);
        log::debug!("{}: {} variants", canonical, variants.len());
        for variant in &variants {
            self.insert(variant, &canonical);
        }
        if canonical.chars().count() > MAX_DISCARDED_LEN {
            self.insert_exact(&canonical, &canonical);
        }
        for alias in &entry.aliases {
            if alias.chars().count() > MAX_DISCARDED_LEN {
                self.insert_exact(alias, &canonical);
            }
        }
    }

    /// Record that `variant` resolves to `canonical`. Idempotent.
    pub fn insert(&mut self, variant: &str, canonical: &str) {
        let node = self.node_mut(variant);
        if !node.terminal.contains(canonical) {
            node.terminal.insert(canonical.to_string());
        }
    }

    /// Like [`insert`](Self::insert), and mark `spelling` as an exact
    /// spelling of `canonical`.
    pub fn insert_exact(&mut self, spelling: &str, canonical: &str) {
        self.insert(spelling, canonical);
        let node = self.node_mut(spelling);
        if !node.exact.contains(canonical) {
            node.exact.insert(canonical.to_string());
        }
    }

    fn node_mut(&mut self, key: &str) -> &mut TrieNode {
        key.bytes().fold(&mut self.root, |node, byte| {
            node.children.entry(byte.to_ascii_lowercase()).or_default()
        })
    }

    /// Node reached by spelling `key` (case-folded), if the path exists.
    pub fn node(&self, key: &str) -> Option<&TrieNode> {
        key.bytes()
            .try_fold(&self.root, |node, byte| node.child(byte.to_ascii_lowercase()))
    }

    /// Terminal set of `key`, or `None` when no variant equals `key`.
    pub fn lookup(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.node(key).and_then(TrieNode::terminal)
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Union `other` into `self`.
    pub fn merge(&mut self, other: PatternTrie) {
        self.root.merge(other.root);
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.is_terminal()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Number of distinct variant spellings stored.
    pub fn terminal_count(&self) -> usize {
        self.root.count_terminals()
    }
}
