//! Kukui Library
//!
//! This library bundles two independent lookup utilities: the Koa Trie, a
//! prefix index with exact membership testing and bounded autocomplete over
//! words and multi-word phrases (with both a sequential and a concurrent
//! fan-out engine), and the Makai Cache, a fixed-capacity LRU cache with a
//! JSON snapshot format.
//!
//! # Architecture
//!
//! The library is designed with the following principles in mind:
//! - Total operations over their input domain: boundary inputs get defined
//!   fallback results, never errors
//! - Writes serialized against reads by the borrow checker, not by locks
//! - Exactly-once accounting for every unit of concurrent traversal work
//! - Comprehensive error handling where failure exists (snapshot codecs)

// Re-export public modules
pub mod data_structures;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Kukui library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
