//! anonboard - anonymous message board backend
//!
//! Threads scoped to named boards, replies, and password-gated moderation
//! served over a JSON API.

pub mod board;
pub mod config;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{
    BoardService, DeleteOutcome, MemoryStore, NewReply, NewThread, Reply, ReplyView, Thread,
    ThreadStore, ThreadView, DELETED_TEXT,
};
pub use config::Config;
pub use error::{BoardError, Result};
