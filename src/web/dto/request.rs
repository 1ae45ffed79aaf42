//! Request DTOs for the web API.
//!
//! Every field defaults to an empty string when absent; input is taken as given.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Body of `POST /api/threads/{board}`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateThreadRequest {
    /// Thread body.
    pub text: String,
    /// Password needed to delete the thread later.
    pub delete_password: String,
}

/// Body of `DELETE /api/threads/{board}`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct DeleteThreadRequest {
    /// Thread to delete.
    pub thread_id: String,
    /// Password given at creation.
    pub delete_password: String,
}

/// Body of `PUT /api/threads/{board}`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ReportThreadRequest {
    /// Thread to report.
    pub thread_id: String,
}

/// Query of `GET /api/replies/{board}`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(default)]
pub struct ThreadQuery {
    /// Thread to fetch.
    pub thread_id: String,
}

/// Body of `POST /api/replies/{board}`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateReplyRequest {
    /// Thread to reply to.
    pub thread_id: String,
    /// Reply body.
    pub text: String,
    /// Password needed to delete the reply later.
    pub delete_password: String,
}

/// Body of `DELETE /api/replies/{board}`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct DeleteReplyRequest {
    /// Thread holding the reply.
    pub thread_id: String,
    /// Reply to delete.
    pub reply_id: String,
    /// Password given at creation.
    pub delete_password: String,
}

/// Body of `PUT /api/replies/{board}`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ReportReplyRequest {
    /// Thread holding the reply.
    pub thread_id: String,
    /// Reply to report.
    pub reply_id: String,
}
