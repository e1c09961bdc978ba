//! Test modules for the Kukui library.
//!
//! This module contains the crate-internal integration suites, including:
//! - Cross-operation tests for the Koa Trie (both autocomplete engines)
//! - Scenario tests for the Makai Cache, snapshot round trips included
//! - Property-based tests using proptest
//! - Test fixtures and utilities
//!
//! Component-local unit, property and concurrency tests live next to the
//! components themselves under `data_structures`.

pub mod makai_cache_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{assert_same_suggestions, entry_strategy, init_test_tracing, word_strategy};
