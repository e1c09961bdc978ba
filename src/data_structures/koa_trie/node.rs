// Copyright (c) 2025 Kukui Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node and symbol primitives for the Koa Trie.
//!
//! This module provides the TrieNode structure and the Symbol unit the trie
//! is keyed by. Nodes are the fundamental building blocks of the trie; each
//! owns its children outright, so the graph is a tree with no back
//! references and no shared ownership.

use fnv::FnvHashMap;

/// One atomic unit of an indexed word or phrase.
///
/// Input text is decomposed into symbols before the symbols are used as
/// child-map keys. A literal space becomes [`Symbol::Boundary`], so
/// multi-word phrases ("nice weather") are indexed symbol by symbol exactly
/// like single words and never collide with any character of the text
/// itself. Every other character is carried verbatim in [`Symbol::Char`].
///
/// `Boundary` orders before every `Char`, and `Char`s order by scalar value;
/// traversals expand children in this order so results are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// The space joining the words of a multi-word phrase.
    Boundary,

    /// Any other character, stored verbatim.
    Char(char),
}

impl Symbol {
    /// Encodes one character of input text.
    pub fn encode(c: char) -> Self {
        match c {
            ' ' => Symbol::Boundary,
            other => Symbol::Char(other),
        }
    }

    /// The display form of this symbol, used when reconstructing
    /// completions onto a caller's prefix.
    ///
    /// Encoding and display are exact inverses:
    /// `Symbol::encode(c).display() == c` for every `char`, and the same
    /// encoding runs at insert time and at lookup time.
    pub fn display(self) -> char {
        match self {
            Symbol::Boundary => ' ',
            Symbol::Char(c) => c,
        }
    }

    /// Decomposes text into its symbol sequence.
    ///
    /// No trimming happens here; callers that want whole-word trimming trim
    /// before encoding.
    pub fn sequence(text: &str) -> impl Iterator<Item = Symbol> + '_ {
        text.chars().map(Symbol::encode)
    }
}

/// A node in the Koa Trie.
///
/// Each node represents one position in the symbol path shared by every
/// indexed word with a common prefix up to that point. A node ending at
/// least one indexed word carries the `terminal` flag; there is no sentinel
/// child key, so no symbol is reserved.
#[derive(Debug)]
pub struct TrieNode {
    /// Map of symbols to child nodes
    pub(crate) children: FnvHashMap<Symbol, TrieNode>,

    /// Whether this node ends at least one indexed word or phrase
    pub(crate) terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            terminal: false,
        }
    }

    /// The node's children in ascending symbol order.
    ///
    /// Map iteration order is not stable across runs, so every traversal
    /// expands children through this accessor.
    pub(crate) fn children_ordered(&self) -> Vec<(Symbol, &TrieNode)> {
        let mut children: Vec<_> = self
            .children
            .iter()
            .map(|(symbol, child)| (*symbol, child))
            .collect();
        children.sort_unstable_by_key(|(symbol, _)| *symbol);
        children
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
