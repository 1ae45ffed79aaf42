//! Reply handlers: `/api/replies/{board}`.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use super::{parse_id, AppState};
use crate::board::{NewReply, ThreadView};
use crate::web::dto::{
    delete_outcome_body, CreateReplyRequest, DeleteReplyRequest, Payload, ReportReplyRequest,
    ThreadQuery, REPORTED,
};
use crate::web::error::ApiError;

/// GET /api/replies/{board}?thread_id= - Get a thread with all replies.
#[utoipa::path(
    get,
    path = "/api/replies/{board}",
    tag = "replies",
    params(("board" = String, Path, description = "Board name"), ThreadQuery),
    responses(
        (status = 200, description = "Thread with every reply", body = ThreadView),
        (status = 404, description = "Thread not found")
    )
)]
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Query(query): Query<ThreadQuery>,
) -> Result<Json<ThreadView>, ApiError> {
    let thread_id = parse_id(&query.thread_id);
    let thread = state.board.get_thread(&thread_id).await?;
    Ok(Json(thread))
}

/// POST /api/replies/{board} - Reply to a thread.
#[utoipa::path(
    post,
    path = "/api/replies/{board}",
    tag = "replies",
    params(("board" = String, Path, description = "Board name")),
    request_body = CreateReplyRequest,
    responses(
        (status = 200, description = "Updated thread with every reply", body = ThreadView),
        (status = 404, description = "Thread not found")
    )
)]
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Payload(req): Payload<CreateReplyRequest>,
) -> Result<Json<ThreadView>, ApiError> {
    let thread_id = parse_id(&req.thread_id);
    let new_reply = NewReply::new(req.text, req.delete_password);
    let thread = state.board.create_reply(&thread_id, new_reply).await?;
    Ok(Json(thread))
}

/// DELETE /api/replies/{board} - Delete a reply with its password.
#[utoipa::path(
    delete,
    path = "/api/replies/{board}",
    tag = "replies",
    params(("board" = String, Path, description = "Board name")),
    request_body = DeleteReplyRequest,
    responses(
        (status = 200, description = "`success`, or `incorrect password` when the password does not match", body = String),
        (status = 404, description = "Thread or reply not found")
    )
)]
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Payload(req): Payload<DeleteReplyRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = parse_id(&req.thread_id);
    let reply_id = parse_id(&req.reply_id);
    let outcome = state
        .board
        .delete_reply(&thread_id, &reply_id, &req.delete_password)
        .await?;
    Ok(delete_outcome_body(outcome))
}

/// PUT /api/replies/{board} - Report a reply.
#[utoipa::path(
    put,
    path = "/api/replies/{board}",
    tag = "replies",
    params(("board" = String, Path, description = "Board name")),
    request_body = ReportReplyRequest,
    responses(
        (status = 200, description = "`reported`", body = String),
        (status = 404, description = "Thread or reply not found")
    )
)]
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Payload(req): Payload<ReportReplyRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = parse_id(&req.thread_id);
    let reply_id = parse_id(&req.reply_id);
    state.board.report_reply(&thread_id, &reply_id).await?;
    Ok(REPORTED)
}
