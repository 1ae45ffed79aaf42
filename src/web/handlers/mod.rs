//! API handlers for the board routes.

pub mod replies;
pub mod threads;

pub use replies::*;
pub use threads::*;

use uuid::Uuid;

use crate::board::BoardService;

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Board service owning the thread store.
    pub board: BoardService,
}

impl AppState {
    /// Create a new application state.
    pub fn new(board: BoardService) -> Self {
        Self { board }
    }
}

/// Parse a client-supplied identifier.
///
/// Anything that is not a UUID maps to the nil UUID, which is never issued,
/// so the lookup that follows reports the entity as not found in the usual
/// thread-before-reply order.
pub(crate) fn parse_id(raw: &str) -> Uuid {
    Uuid::parse_str(raw.trim()).unwrap_or(Uuid::nil())
}
