//! Thread model for anonboard.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::reply::Reply;

/// A top-level post on a board, owning its replies.
///
/// Outbound data goes through [`ThreadView`](super::ThreadView).
#[derive(Debug, Clone)]
pub struct Thread {
    /// Unique thread ID.
    pub id: Uuid,
    /// Name of the board this thread belongs to.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last activity timestamp, drives board ordering.
    pub bumped_on: DateTime<Utc>,
    /// Set by a report, never cleared.
    pub reported: bool,
    /// Password required to delete the thread.
    pub delete_password: String,
    /// Replies in insertion order.
    pub replies: Vec<Reply>,
}

impl Thread {
    /// Build a fresh thread from creation data, stamped with `now`.
    pub fn create(new_thread: NewThread, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            board: new_thread.board,
            text: new_thread.text,
            created_on: now,
            bumped_on: now,
            reported: false,
            delete_password: new_thread.delete_password,
            replies: Vec::new(),
        }
    }

    /// Append a reply and bump the thread.
    ///
    /// `bumped_on` never moves backwards, even if the clock does.
    pub fn push_reply(&mut self, reply: Reply) {
        self.bumped_on = self.bumped_on.max(reply.created_on);
        self.replies.push(reply);
    }

    /// Find a reply by ID.
    pub fn reply(&self, reply_id: &Uuid) -> Option<&Reply> {
        self.replies.iter().find(|r| &r.id == reply_id)
    }

    /// Find a reply by ID for mutation.
    pub fn reply_mut(&mut self, reply_id: &Uuid) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|r| &r.id == reply_id)
    }

    /// Check a delete password, byte for byte.
    pub fn password_matches(&self, password: &str) -> bool {
        self.delete_password == password
    }
}

/// Data for creating a new thread.
#[derive(Debug, Clone)]
pub struct NewThread {
    /// Board to post on.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Password for later deletion.
    pub delete_password: String,
}

impl NewThread {
    /// Create new thread data.
    pub fn new(
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        Self {
            board: board.into(),
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}
