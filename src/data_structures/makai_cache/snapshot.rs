// Copyright (c) 2025 Kukui Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Snapshot codec for the Makai Cache.
//!
//! A snapshot is a JSON document carrying the configured capacity and the
//! live entries in eviction order, head (most recently set) first; restoring
//! rebuilds an equivalent eviction order. File handling stays with the
//! caller: the codec works against `io::Write`/`io::Read`.

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::cache::MakaiCache;
use super::error::{MakaiCacheError, Result};

/// Wire form of a restored snapshot.
#[derive(Debug, Deserialize)]
struct Snapshot<V> {
    /// Configured capacity, kept even when zero
    capacity: usize,

    /// Entries in eviction order, most recently set first
    entries: Vec<SnapshotEntry<V>>,
}

#[derive(Debug, Deserialize)]
struct SnapshotEntry<V> {
    key: String,
    value: V,
}

/// Borrowing counterpart of [`Snapshot`] used when writing.
#[derive(Debug, Serialize)]
struct SnapshotRef<'a, V> {
    capacity: usize,
    entries: Vec<SnapshotEntryRef<'a, V>>,
}

#[derive(Debug, Serialize)]
struct SnapshotEntryRef<'a, V> {
    key: &'a str,
    value: &'a V,
}

impl<V> MakaiCache<V> {
    /// Writes a snapshot of this cache.
    ///
    /// # Arguments
    ///
    /// * `writer` - Destination for the encoded snapshot.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The snapshot was written.
    /// * `Err(MakaiCacheError)` - Encoding or writing failed.
    pub fn snapshot<W: Write>(&self, writer: W) -> Result<()>
    where
        V: Serialize,
    {
        let snapshot = SnapshotRef {
            capacity: self.capacity(),
            entries: self
                .iter()
                .map(|(key, value)| SnapshotEntryRef { key, value })
                .collect(),
        };
        serde_json::to_writer(writer, &snapshot)?;
        Ok(())
    }

    /// Restores a cache from a snapshot.
    ///
    /// The restored cache has the snapshot's capacity and an equivalent
    /// eviction order: the entry that was most recently set is the head
    /// again. Structurally invalid snapshots (duplicate keys, more entries
    /// than capacity) are rejected.
    ///
    /// # Arguments
    ///
    /// * `reader` - Source of the encoded snapshot.
    ///
    /// # Returns
    ///
    /// * `Ok(MakaiCache<V>)` - The restored cache.
    /// * `Err(MakaiCacheError)` - Decoding failed or the snapshot is corrupt.
    pub fn restore<R: Read>(reader: R) -> Result<Self>
    where
        V: DeserializeOwned,
    {
        let snapshot: Snapshot<V> = serde_json::from_reader(reader)?;
        if snapshot.entries.len() > snapshot.capacity {
            return Err(MakaiCacheError::Corrupt(format!(
                "{} entries exceed capacity {}",
                snapshot.entries.len(),
                snapshot.capacity
            )));
        }

        let mut cache = MakaiCache::new(snapshot.capacity);
        // Entries are stored head first; inserting in reverse recreates the
        // original eviction order through the ordinary set path.
        for entry in snapshot.entries.into_iter().rev() {
            if cache.get(&entry.key).is_some() {
                return Err(MakaiCacheError::Corrupt(format!(
                    "duplicate key {:?}",
                    entry.key
                )));
            }
            cache.set(entry.key, entry.value);
        }
        Ok(cache)
    }
}
