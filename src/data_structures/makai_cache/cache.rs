// Copyright (c) 2025 Kukui Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Core mechanics of the Makai Cache.
//!
//! Entries live in a slab; the eviction order is a doubly-linked list
//! threaded through slab indices, head = most recently set. Index links
//! replace raw pointers: the mechanics stay O(1) and the slab serializes
//! naturally for snapshots.

use fnv::FnvHashMap;
use tracing::debug;

/// One stored entry plus its position in the eviction list.
#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Makai Cache is a fixed-capacity key-value store with least-recently-used
/// eviction.
///
/// `set` inserts at the head of the eviction list, promotes an existing key,
/// and evicts the tail entry once the capacity is reached; `get` is a plain
/// lookup and does not touch the eviction order. A cache created with
/// capacity zero permanently rejects every insertion.
///
/// All operations are total; no method returns an error. Snapshot and
/// restore live in the sibling codec module.
#[derive(Debug)]
pub struct MakaiCache<V> {
    /// Maximum number of entries; zero disables the cache entirely
    capacity: usize,

    /// Map of keys to slab slots
    index: FnvHashMap<String, usize>,

    /// Slab of entries; eviction order is threaded through prev/next
    slots: Vec<Entry<V>>,

    /// Most recently set entry
    head: Option<usize>,

    /// Least recently set entry, next eviction victim
    tail: Option<usize>,
}

impl<V> MakaiCache<V> {
    /// Creates a new empty `MakaiCache` with the given capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of entries. Zero yields a cache that
    ///   rejects all insertions.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            index: FnvHashMap::default(),
            slots: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Looks up a value by key.
    ///
    /// Lookup does not promote the entry in the eviction order; only `set`
    /// refreshes recency.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up.
    ///
    /// # Returns
    ///
    /// The stored value, or `None` if the key is not cached.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.slots[slot].value)
    }

    /// Stores a value under a key.
    ///
    /// An existing key gets its value replaced and is promoted to the head
    /// of the eviction order. A new key evicts the least recently set entry
    /// first when the cache is full. With capacity zero this is a no-op.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to store under.
    /// * `value` - The value to store.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        if self.capacity == 0 {
            return;
        }
        let key = key.into();

        if let Some(&slot) = self.index.get(&key) {
            self.slots[slot].value = value;
            self.promote(slot);
            return;
        }

        let slot = match self.tail {
            Some(victim) if self.index.len() == self.capacity => {
                // Reuse the evicted entry's slot for the new one.
                self.unlink(victim);
                let evicted_key = std::mem::take(&mut self.slots[victim].key);
                self.index.remove(&evicted_key);
                debug!(key = %evicted_key, "evicted least recently used entry");

                self.slots[victim] = Entry {
                    key: key.clone(),
                    value,
                    prev: None,
                    next: None,
                };
                victim
            }
            _ => {
                self.slots.push(Entry {
                    key: key.clone(),
                    value,
                    prev: None,
                    next: None,
                });
                self.slots.len() - 1
            }
        };
        self.index.insert(key, slot);
        self.push_front(slot);
    }

    /// Iterates entries in eviction order, most recently set first.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            cache: self,
            next: self.head,
        }
    }

    /// Moves an already-linked entry to the head of the eviction order.
    fn promote(&mut self, slot: usize) {
        self.unlink(slot);
        self.push_front(slot);
    }

    /// Detaches an entry from the eviction order.
    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.slots[slot].prev, self.slots[slot].next);
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
        self.slots[slot].prev = None;
        self.slots[slot].next = None;
    }

    /// Links a detached entry in at the head of the eviction order.
    fn push_front(&mut self, slot: usize) {
        self.slots[slot].prev = None;
        self.slots[slot].next = self.head;
        if let Some(old_head) = self.head {
            self.slots[old_head].prev = Some(slot);
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }
}

/// Iterator over cache entries in eviction order, most recent first.
#[derive(Debug)]
pub struct Iter<'a, V> {
    cache: &'a MakaiCache<V>,
    next: Option<usize>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.next?;
        let entry = &self.cache.slots[slot];
        self.next = entry.next;
        Some((entry.key.as_str(), &entry.value))
    }
}
