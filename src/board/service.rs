//! Board service for anonboard.
//!
//! This module provides the read projections and mutations on threads and
//! replies, with delete-password checks and output redaction.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::reply::{NewReply, Reply};
use super::store::{MemoryStore, ThreadStore};
use super::thread::{NewThread, Thread};
use super::view::ThreadView;
use crate::config::BoardConfig;
use crate::{BoardError, Result};

/// Result of a password-gated delete.
///
/// A wrong password is an expected outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Password matched and the delete was applied.
    Deleted,
    /// Password did not match; nothing changed.
    IncorrectPassword,
}

/// Service for board operations.
///
/// Every operation holds the store lock from lookup to result, so operations
/// never interleave. Cloning is cheap and shares the same store.
pub struct BoardService<S = MemoryStore> {
    store: Arc<RwLock<S>>,
    clock: Arc<MonotonicClock>,
    config: BoardConfig,
}

impl<S> Clone for BoardService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            config: self.config,
        }
    }
}

impl BoardService<MemoryStore> {
    /// Create a service over a fresh in-memory store.
    pub fn in_memory(config: BoardConfig) -> Self {
        Self::new(MemoryStore::new(), config)
    }
}

impl<S: ThreadStore> BoardService<S> {
    /// Create a service owning the given store.
    pub fn new(store: S, config: BoardConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            clock: Arc::new(MonotonicClock::default()),
            config,
        }
    }

    /// Listing windows in effect.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// List the most recently bumped threads on a board.
    ///
    /// At most `thread_limit` threads, newest bump first, each with its last
    /// `reply_preview_limit` replies. Equal bump times list the newer thread
    /// first. An unknown board yields an empty list.
    pub async fn list_threads(&self, board: &str) -> Vec<ThreadView> {
        let store = self.store.read().await;

        let mut threads = store.list_threads_by_board(board);
        threads.reverse();
        threads.sort_by(|a, b| b.bumped_on.cmp(&a.bumped_on));

        let views: Vec<ThreadView> = threads
            .into_iter()
            .take(self.config.thread_limit)
            .map(|thread| ThreadView::preview(thread, self.config.reply_preview_limit))
            .collect();

        tracing::debug!(board, count = views.len(), "Listed threads");
        views
    }

    /// Create a thread and return its public view.
    pub async fn create_thread(&self, new_thread: NewThread) -> Result<ThreadView> {
        let mut store = self.store.write().await;

        let thread = Thread::create(new_thread, self.clock.now());
        let view = ThreadView::full(&thread);
        let board = thread.board.clone();
        store.insert_thread(thread)?;

        tracing::info!(board = %board, thread_id = %view.id, "Thread created");
        Ok(view)
    }

    /// Delete a thread if the password matches. Deletion is permanent.
    pub async fn delete_thread(&self, thread_id: &Uuid, password: &str) -> Result<DeleteOutcome> {
        let mut store = self.store.write().await;

        let thread = store
            .find_thread(thread_id)
            .ok_or_else(BoardError::thread_not_found)?;

        if !thread.password_matches(password) {
            tracing::warn!(thread_id = %thread_id, "Incorrect password for thread deletion");
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        if !store.remove_thread(thread_id) {
            return Err(BoardError::Internal(format!(
                "thread {thread_id} vanished during delete"
            )));
        }

        tracing::info!(thread_id = %thread_id, "Thread deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Flag a thread for moderation. Reporting twice is harmless.
    pub async fn report_thread(&self, thread_id: &Uuid) -> Result<()> {
        let mut store = self.store.write().await;

        let thread = store
            .find_thread_mut(thread_id)
            .ok_or_else(BoardError::thread_not_found)?;
        thread.reported = true;

        tracing::info!(thread_id = %thread_id, "Thread reported");
        Ok(())
    }

    /// Get a thread with all of its replies.
    pub async fn get_thread(&self, thread_id: &Uuid) -> Result<ThreadView> {
        let store = self.store.read().await;

        let thread = store
            .find_thread(thread_id)
            .ok_or_else(BoardError::thread_not_found)?;

        tracing::debug!(thread_id = %thread_id, replies = thread.replies.len(), "Fetched thread");
        Ok(ThreadView::full(thread))
    }

    /// Append a reply to a thread, bumping it, and return the updated thread.
    pub async fn create_reply(&self, thread_id: &Uuid, new_reply: NewReply) -> Result<ThreadView> {
        let mut store = self.store.write().await;

        let thread = store
            .find_thread_mut(thread_id)
            .ok_or_else(BoardError::thread_not_found)?;

        let reply = Reply::create(new_reply, self.clock.now());
        let reply_id = reply.id;
        thread.push_reply(reply);

        tracing::info!(
            board = %thread.board,
            thread_id = %thread_id,
            reply_id = %reply_id,
            "Reply created"
        );
        Ok(ThreadView::full(thread))
    }

    /// Soft delete a reply if the password matches.
    ///
    /// The reply keeps its place; only its text becomes `[deleted]`. The
    /// thread is not bumped.
    pub async fn delete_reply(
        &self,
        thread_id: &Uuid,
        reply_id: &Uuid,
        password: &str,
    ) -> Result<DeleteOutcome> {
        let mut store = self.store.write().await;

        let reply = store
            .find_thread_mut(thread_id)
            .ok_or_else(BoardError::thread_not_found)?
            .reply_mut(reply_id)
            .ok_or_else(BoardError::reply_not_found)?;

        if !reply.password_matches(password) {
            tracing::warn!(thread_id = %thread_id, reply_id = %reply_id, "Incorrect password for reply deletion");
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        reply.redact();

        tracing::info!(thread_id = %thread_id, reply_id = %reply_id, "Reply deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Flag a reply for moderation. Reporting twice is harmless.
    pub async fn report_reply(&self, thread_id: &Uuid, reply_id: &Uuid) -> Result<()> {
        let mut store = self.store.write().await;

        let reply = store
            .find_thread_mut(thread_id)
            .ok_or_else(BoardError::thread_not_found)?
            .reply_mut(reply_id)
            .ok_or_else(BoardError::reply_not_found)?;
        reply.reported = true;

        tracing::info!(thread_id = %thread_id, reply_id = %reply_id, "Reply reported");
        Ok(())
    }

    /// Run a read-only closure against the raw store.
    ///
    /// Exposes moderation state (report flags) that public views omit.
    pub async fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let store = self.store.read().await;
        f(&*store)
    }
}

/// Timestamp source that never repeats or goes backwards.
///
/// Keeps bump ordering strict even when two posts land within the system
/// clock's resolution.
#[derive(Debug, Default)]
struct MonotonicClock {
    last_nanos: AtomicI64,
}

impl MonotonicClock {
    fn now(&self) -> DateTime<Utc> {
        let wall = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
        let prev = self
            .last_nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(wall.max(last.saturating_add(1)))
            })
            .unwrap_or(wall);
        DateTime::from_timestamp_nanos(wall.max(prev.saturating_add(1)))
    }
}
