//! Data Transfer Objects for the web API.

pub mod payload;
pub mod request;
pub mod response;

pub use payload::Payload;
pub use request::*;
pub use response::*;
