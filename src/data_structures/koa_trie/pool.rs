// Copyright (c) 2025 Kukui Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Worker pool for the concurrent autocomplete engine.
//!
//! A traversal is a set of work items, each expanding exactly one node's
//! children. Workers pull items from a shared FIFO queue and report matches
//! over an event channel; the node graph itself is borrowed immutably and
//! needs no lock.
//!
//! Termination races two conditions: the caller has collected enough
//! completions, or the in-flight counter reaches zero because the whole
//! subtree has been expanded. Whichever fires first, the caller cancels the
//! pool, which wakes every blocked worker.
//!
//! # Accounting invariant
//!
//! `in_flight` is incremented before an item is enqueued (the seed included)
//! and decremented exactly once per item, after that item's expansion has
//! enqueued all of its children. The counter can therefore only reach zero
//! once the subtree is exhausted: undercounting would report exhaustion with
//! work still pending, overcounting would leave the caller waiting forever.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::Sender;

use parking_lot::{Condvar, Mutex};

use super::node::TrieNode;

/// One unit of traversal work: expand a single node's children.
///
/// `prefix` is the completion text accumulated on the path from the caller's
/// prefix down to `node`.
pub(crate) struct WorkItem<'t> {
    pub(crate) node: &'t TrieNode,
    pub(crate) prefix: String,
}

/// Events emitted by workers to the coordinating caller.
pub(crate) enum TraversalEvent {
    /// A terminal node was reached; carries the reconstructed completion.
    Completion(String),

    /// The in-flight count reached zero: the subtree is exhausted.
    Drained,
}

/// Shared state of one concurrent traversal.
pub(crate) struct TraversalPool<'t> {
    /// Pending work, consumed oldest first
    queue: Mutex<VecDeque<WorkItem<'t>>>,

    /// Signalled on every enqueue and on cancellation
    ready: Condvar,

    /// Cancellation flag shared by all workers
    cancelled: AtomicBool,

    /// Items enqueued but not yet fully expanded
    in_flight: AtomicUsize,
}

impl<'t> TraversalPool<'t> {
    /// Creates an idle pool with no pending work.
    pub(crate) fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            ready: Condvar::new(),
            cancelled: AtomicBool::new(false),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Enqueues one unit of work.
    ///
    /// The item is accounted for in `in_flight` before it becomes visible to
    /// any worker, so the counter cannot drop to zero while the item is
    /// pending.
    pub(crate) fn submit(&self, item: WorkItem<'t>) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.queue.lock().push_back(item);
        self.ready.notify_one();
    }

    /// Blocks until a work item is available or the traversal is cancelled.
    ///
    /// Returns `None` once cancellation has been observed. The caller must
    /// not touch the queue or the event channel after that.
    fn next(&self) -> Option<WorkItem<'t>> {
        let mut queue = self.queue.lock();
        loop {
            if self.cancelled.load(Ordering::Acquire) {
                return None;
            }
            if let Some(item) = queue.pop_front() {
                return Some(item);
            }
            self.ready.wait(&mut queue);
        }
    }

    /// Cancels the traversal and wakes every blocked worker.
    pub(crate) fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.ready.notify_all();
    }

    /// Runs one worker until cancellation.
    ///
    /// For every dequeued item the worker emits a completion if the node is
    /// terminal, enqueues one child item per child edge, and only then
    /// retires the item from the in-flight count. Every completion is sent
    /// before its item's decrement, and all decrements precede the final
    /// zero transition, so by the time `Drained` is observed every match of
    /// the subtree has already been delivered.
    ///
    /// Send failures are ignored: the receiver only disappears after the
    /// caller has stopped collecting, at which point results no longer
    /// matter.
    pub(crate) fn run_worker(&self, events: Sender<TraversalEvent>) {
        while let Some(item) = self.next() {
            if item.node.terminal {
                let _ = events.send(TraversalEvent::Completion(item.prefix.clone()));
            }
            for (symbol, child) in item.node.children_ordered() {
                let mut prefix = item.prefix.clone();
                prefix.push(symbol.display());
                self.submit(WorkItem { node: child, prefix });
            }
            if self.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
                let _ = events.send(TraversalEvent::Drained);
            }
        }
    }
}
