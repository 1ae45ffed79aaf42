//! Thread storage for anonboard.
//!
//! [`ThreadStore`] is the persistence contract the board service works
//! against. [`MemoryStore`] keeps everything in process memory; a durable
//! backend must make `insert_thread` and `remove_thread` durable before
//! returning.

use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use super::thread::Thread;
use crate::{BoardError, Result};

/// Storage contract for threads and their nested replies.
///
/// Replies are reached through their owning thread; there is no separate
/// reply storage.
pub trait ThreadStore: Send + Sync {
    /// Insert a new thread. Fails only if the ID is already taken.
    fn insert_thread(&mut self, thread: Thread) -> Result<()>;

    /// Get a thread by ID.
    fn find_thread(&self, id: &Uuid) -> Option<&Thread>;

    /// Get a thread by ID for mutation.
    fn find_thread_mut(&mut self, id: &Uuid) -> Option<&mut Thread>;

    /// Remove a thread with all its replies.
    ///
    /// Returns true if a thread was removed, false if not found.
    fn remove_thread(&mut self, id: &Uuid) -> bool;

    /// List all threads on a board in store (insertion) order.
    ///
    /// Reported threads are included.
    fn list_threads_by_board(&self, board: &str) -> Vec<&Thread>;

    /// Total number of threads across all boards.
    fn thread_count(&self) -> usize;
}

/// In-process thread store.
///
/// Threads are kept in insertion order under a monotonically increasing
/// sequence number, with an ID index for direct lookup.
#[derive(Debug, Default)]
pub struct MemoryStore {
    threads: BTreeMap<u64, Thread>,
    index: HashMap<Uuid, u64>,
    next_seq: u64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThreadStore for MemoryStore {
    fn insert_thread(&mut self, thread: Thread) -> Result<()> {
        if self.index.contains_key(&thread.id) {
            return Err(BoardError::Internal(format!(
                "duplicate thread id {}",
                thread.id
            )));
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(thread.id, seq);
        self.threads.insert(seq, thread);
        Ok(())
    }

    fn find_thread(&self, id: &Uuid) -> Option<&Thread> {
        self.index.get(id).and_then(|seq| self.threads.get(seq))
    }

    fn find_thread_mut(&mut self, id: &Uuid) -> Option<&mut Thread> {
        let seq = self.index.get(id)?;
        self.threads.get_mut(seq)
    }

    fn remove_thread(&mut self, id: &Uuid) -> bool {
        match self.index.remove(id) {
            Some(seq) => self.threads.remove(&seq).is_some(),
            None => false,
        }
    }

    fn list_threads_by_board(&self, board: &str) -> Vec<&Thread> {
        self.threads
            .values()
            .filter(|thread| thread.board == board)
            .collect()
    }

    fn thread_count(&self) -> usize {
        self.threads.len()
    }
}
