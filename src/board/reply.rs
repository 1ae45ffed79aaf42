//! Reply model for anonboard.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Text a reply carries after a successful delete.
pub const DELETED_TEXT: &str = "[deleted]";

/// A response attached to exactly one thread.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Unique reply ID.
    pub id: Uuid,
    /// Reply body, or [`DELETED_TEXT`] once deleted.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Set by a report, never cleared.
    pub reported: bool,
    /// Password required to delete the reply.
    pub delete_password: String,
}

impl Reply {
    /// Build a fresh reply from creation data, stamped with `now`.
    pub fn create(new_reply: NewReply, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: new_reply.text,
            created_on: now,
            reported: false,
            delete_password: new_reply.delete_password,
        }
    }

    /// Check a delete password, byte for byte.
    pub fn password_matches(&self, password: &str) -> bool {
        self.delete_password == password
    }

    /// Soft delete: the record stays, only its text is replaced.
    pub fn redact(&mut self) {
        self.text = DELETED_TEXT.to_string();
    }

    /// Whether the reply has been soft deleted.
    pub fn is_deleted(&self) -> bool {
        self.text == DELETED_TEXT
    }
}

/// Data for creating a new reply.
#[derive(Debug, Clone)]
pub struct NewReply {
    /// Reply body.
    pub text: String,
    /// Password for later deletion.
    pub delete_password: String,
}

impl NewReply {
    /// Create new reply data.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}
