// Copyright (c) 2025 Kukui Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Koa Trie: a prefix index with bounded autocomplete over words and phrases.
//!
//! The trie indexes single words and multi-word phrases ("nice weather")
//! symbol by symbol, supports exact membership testing, and completes a
//! prefix to at most `max_results` indexed entries. Completion is available
//! as a sequential worklist traversal and as a concurrent fan-out over a
//! small worker pool; both read the same immutable node graph and
//! reconstruct completions onto the caller's prefix.
//!
//! # Features
//!
//! - Whole-word whitespace trimming on insert and membership lookup.
//! - Phrase-aware indexing: a space is one symbol, so autocomplete crosses
//!   word boundaries ("nice" completes to "nice weather").
//! - Hard result cutoff: traversal stops the instant enough completions are
//!   collected, not after exploring the whole subtree.
//! - Deterministic expansion order in the sequential engine (children by
//!   ascending symbol); the concurrent engine keeps the set semantics but
//!   interleaves non-deterministically.
//!
//! # Concurrency
//!
//! Insertion takes `&mut self`, both lookups take `&self`; the borrow
//! checker enforces that writes are serialized against reads. The concurrent
//! engine spawns scoped worker threads that borrow the node graph immutably,
//! so no lock guards the nodes themselves.
//!
//! # Example
//!
//! ```
//! use kukui_lib::data_structures::koa_trie::KoaTrie;
//!
//! let mut trie = KoaTrie::new();
//! trie.add("nice");
//! trie.add("nice weather");
//!
//! assert!(trie.search("nice weather"));
//! assert!(!trie.search("nic"));
//!
//! let completions = trie.autocomplete("ni", 10);
//! assert_eq!(completions, vec!["nice".to_string(), "nice weather".to_string()]);
//! ```

mod config;
mod node;
mod pool;

#[cfg(test)]
mod tests;

pub use config::KoaTrieConfig;

use std::collections::VecDeque;
use std::sync::mpsc;
use std::thread;

use tracing::{debug, trace};

use node::{Symbol, TrieNode};
use pool::{TraversalEvent, TraversalPool, WorkItem};

/// Koa Trie is a prefix tree over words and multi-word phrases with exact
/// membership testing and bounded-cardinality autocomplete.
///
/// All operations are total: malformed or boundary inputs (empty words, an
/// unknown prefix, a zero result budget) produce defined fallback results
/// rather than errors. There is no deletion; the graph only grows until the
/// trie is dropped.
#[derive(Debug)]
pub struct KoaTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct words and phrases indexed
    words: usize,

    /// Configuration options
    config: KoaTrieConfig,
}

impl KoaTrie {
    /// Creates a new empty `KoaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(KoaTrieConfig::default())
    }

    /// Creates a new empty `KoaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: KoaTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            words: 0,
            config,
        }
    }

    /// Indexes a word or multi-word phrase.
    ///
    /// Leading and trailing whitespace on the whole word is trimmed before
    /// the word is decomposed into symbols; an input that trims to nothing
    /// indexes nothing. Inserting a word that is already indexed is a no-op.
    ///
    /// # Arguments
    ///
    /// * `word` - The word or phrase to index.
    pub fn add(&mut self, word: &str) {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for symbol in Symbol::sequence(trimmed) {
            node = node.children.entry(symbol).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
    }

    /// Tests whether a word or phrase was itself indexed.
    ///
    /// The input is trimmed and encoded exactly as in [`KoaTrie::add`]. A
    /// word that is merely a prefix of indexed entries, but was never
    /// indexed itself, is not a member. Empty input reads the root's flag,
    /// which nothing can set, so it is always `false`.
    ///
    /// # Arguments
    ///
    /// * `word` - The word or phrase to look up.
    ///
    /// # Returns
    ///
    /// `true` if the word was indexed, `false` otherwise.
    pub fn search(&self, word: &str) -> bool {
        match self.descend(word.trim()) {
            Some(node) => node.terminal,
            None => false,
        }
    }

    /// Collects up to `max_results` indexed completions of `prefix`.
    ///
    /// The prefix is taken verbatim (no trimming) and need not be an indexed
    /// word itself; if its symbol path is absent the result is empty, as it
    /// is for a zero result budget. Traversal is breadth-first with children
    /// expanded in ascending symbol order and a node's own completion
    /// emitted before its children, so the result order is reproducible:
    /// shorter completions first, ties lexicographic by symbol. Collection
    /// stops the instant the budget is reached.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to complete.
    /// * `max_results` - Maximum number of completions to collect.
    ///
    /// # Returns
    ///
    /// The collected completions, each beginning with `prefix`.
    pub fn autocomplete(&self, prefix: &str, max_results: usize) -> Vec<String> {
        let mut completions = Vec::new();
        if max_results == 0 {
            return completions;
        }
        let Some(start) = self.descend(prefix) else {
            return completions;
        };
        trace!(prefix, max_results, "sequential autocomplete starting");

        let mut worklist = VecDeque::new();
        worklist.push_back((start, prefix.to_string()));
        while let Some((node, accumulated)) = worklist.pop_front() {
            if node.terminal {
                completions.push(accumulated.clone());
                if completions.len() == max_results {
                    return completions;
                }
            }
            for (symbol, child) in node.children_ordered() {
                let mut extended = accumulated.clone();
                extended.push(symbol.display());
                worklist.push_back((child, extended));
            }
        }
        completions
    }

    /// Collects up to `max_results` indexed completions of `prefix`,
    /// exploring the subtree with a pool of worker threads.
    ///
    /// Same contract as [`KoaTrie::autocomplete`], with one caveat: when the
    /// budget is smaller than the number of matches, which matches are
    /// returned depends on worker interleaving, so truncated runs yield a
    /// non-deterministic subset. Exhaustive runs (budget at least the match
    /// count) return exactly the same set as the sequential engine.
    ///
    /// The traversal terminates on whichever happens first: the budget is
    /// reached, or every pending expansion has retired with the subtree
    /// exhausted. Either way all workers are cancelled and joined before
    /// this method returns.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to complete.
    /// * `max_results` - Maximum number of completions to collect.
    ///
    /// # Returns
    ///
    /// The collected completions, each beginning with `prefix`.
    pub fn autocomplete_concurrent(&self, prefix: &str, max_results: usize) -> Vec<String> {
        let mut completions = Vec::new();
        if max_results == 0 {
            return completions;
        }
        let Some(start) = self.descend(prefix) else {
            return completions;
        };

        let worker_count = self.config.get_worker_count();
        trace!(
            prefix,
            max_results,
            worker_count,
            "concurrent autocomplete starting"
        );

        let pool = TraversalPool::new();
        let (events_tx, events_rx) = mpsc::channel();

        thread::scope(|scope| {
            for _ in 0..worker_count {
                let events = events_tx.clone();
                let pool = &pool;
                scope.spawn(move || pool.run_worker(events));
            }
            pool.submit(WorkItem {
                node: start,
                prefix: prefix.to_string(),
            });

            for event in events_rx.iter() {
                match event {
                    TraversalEvent::Completion(word) => {
                        completions.push(word);
                        if completions.len() == max_results {
                            debug!(
                                collected = completions.len(),
                                "concurrent autocomplete cancelled: budget reached"
                            );
                            break;
                        }
                    }
                    TraversalEvent::Drained => {
                        debug!(
                            collected = completions.len(),
                            "concurrent autocomplete finished: subtree exhausted"
                        );
                        break;
                    }
                }
            }
            pool.cancel();
        });
        completions
    }

    /// Number of distinct words and phrases indexed.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether the trie indexes nothing.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Walks the symbol path of `text` from the root.
    ///
    /// Returns the node the path ends at, or `None` as soon as any symbol
    /// has no edge. Zero symbols end at the root.
    fn descend(&self, text: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for symbol in Symbol::sequence(text) {
            node = node.children.get(&symbol)?;
        }
        Some(node)
    }
}

impl Default for KoaTrie {
    fn default() -> Self {
        Self::new()
    }
}
