// Copyright (c) 2025 Kukui Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Makai Cache.
//!
//! The cache operations themselves are total; only the snapshot codec can
//! fail.

/// Errors that can occur in Makai Cache snapshot operations.
#[derive(Debug, thiserror::Error)]
pub enum MakaiCacheError {
    /// Snapshot encoding or decoding failed at the serialization layer
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A decoded snapshot violated the cache's structural invariants
    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),
}

/// Result type for Makai Cache operations
pub type Result<T> = std::result::Result<T, MakaiCacheError>;
