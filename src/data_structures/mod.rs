//! Data structures for the Kukui library.
//!
//! This module contains the two lookup utilities the crate bundles. They do
//! not compose; each stands alone:
//! - `koa_trie`: phrase-aware prefix index with sequential and concurrent
//!   bounded autocomplete
//! - `makai_cache`: fixed-capacity LRU cache with a JSON snapshot format

pub mod koa_trie;
pub mod makai_cache;

// Re-export common data structures
pub use koa_trie::{KoaTrie, KoaTrieConfig};
pub use makai_cache::{MakaiCache, MakaiCacheError};
