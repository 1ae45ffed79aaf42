//! Web API module for anonboard.
//!
//! JSON routes under `/api/threads/{board}` and `/api/replies/{board}`,
//! plus a health check and Swagger UI.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
