//! Outbound projections of threads and replies.
//!
//! These are the only board types that serialize. Neither carries the delete
//! password or the report flag.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::reply::Reply;
use super::thread::Thread;

/// Public view of a reply.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReplyView {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Reply body, `[deleted]` after deletion.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
}

impl From<&Reply> for ReplyView {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text.clone(),
            created_on: reply.created_on,
        }
    }
}

/// Public view of a thread with a window of its replies.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ThreadView {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Thread body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last bump timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Replies in chronological order.
    pub replies: Vec<ReplyView>,
}

impl ThreadView {
    /// View with every reply.
    pub fn full(thread: &Thread) -> Self {
        Self::with_replies(thread, &thread.replies)
    }

    /// View with only the last `count` replies, still oldest first.
    pub fn preview(thread: &Thread, count: usize) -> Self {
        let start = thread.replies.len().saturating_sub(count);
        Self::with_replies(thread, &thread.replies[start..])
    }

    fn with_replies(thread: &Thread, replies: &[Reply]) -> Self {
        Self {
            id: thread.id,
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies: replies.iter().map(ReplyView::from).collect(),
        }
    }
}
