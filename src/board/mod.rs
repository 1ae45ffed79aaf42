//! Board module for anonboard.
//!
//! This module provides the message board core:
//! - Thread and reply models (threads own their replies)
//! - Thread storage behind the `ThreadStore` contract
//! - Redacted public views of threads and replies
//! - The board service implementing listing, posting, deletion and reporting

mod reply;
mod service;
mod store;
mod thread;
mod view;

pub use reply::{NewReply, Reply, DELETED_TEXT};
pub use service::{BoardService, DeleteOutcome};
pub use store::{MemoryStore, ThreadStore};
pub use thread::{NewThread, Thread};
pub use view::{ReplyView, ThreadView};
