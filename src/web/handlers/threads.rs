//! Thread handlers: `/api/threads/{board}`.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use super::{parse_id, AppState};
use crate::board::{NewThread, ThreadView};
use crate::web::dto::{
    delete_outcome_body, CreateThreadRequest, DeleteThreadRequest, Payload, ReportThreadRequest,
    REPORTED,
};
use crate::web::error::ApiError;

/// GET /api/threads/{board} - List the most recently bumped threads.
#[utoipa::path(
    get,
    path = "/api/threads/{board}",
    tag = "threads",
    params(("board" = String, Path, description = "Board name")),
    responses(
        (status = 200, description = "Up to 10 threads, newest bump first, with their last 3 replies", body = Vec<ThreadView>)
    )
)]
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Json<Vec<ThreadView>> {
    Json(state.board.list_threads(&board).await)
}

/// POST /api/threads/{board} - Create a new thread.
#[utoipa::path(
    post,
    path = "/api/threads/{board}",
    tag = "threads",
    params(("board" = String, Path, description = "Board name")),
    request_body = CreateThreadRequest,
    responses(
        (status = 200, description = "Created thread", body = ThreadView),
        (status = 400, description = "Undecodable body")
    )
)]
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Payload(req): Payload<CreateThreadRequest>,
) -> Result<Json<ThreadView>, ApiError> {
    let new_thread = NewThread::new(board, req.text, req.delete_password);
    let thread = state.board.create_thread(new_thread).await?;
    Ok(Json(thread))
}

/// DELETE /api/threads/{board} - Delete a thread with its password.
#[utoipa::path(
    delete,
    path = "/api/threads/{board}",
    tag = "threads",
    params(("board" = String, Path, description = "Board name")),
    request_body = DeleteThreadRequest,
    responses(
        (status = 200, description = "`success`, or `incorrect password` when the password does not match", body = String),
        (status = 404, description = "Thread not found")
    )
)]
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Payload(req): Payload<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = parse_id(&req.thread_id);
    let outcome = state
        .board
        .delete_thread(&thread_id, &req.delete_password)
        .await?;
    Ok(delete_outcome_body(outcome))
}

/// PUT /api/threads/{board} - Report a thread.
#[utoipa::path(
    put,
    path = "/api/threads/{board}",
    tag = "threads",
    params(("board" = String, Path, description = "Board name")),
    request_body = ReportThreadRequest,
    responses(
        (status = 200, description = "`reported`", body = String),
        (status = 404, description = "Thread not found")
    )
)]
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    Payload(req): Payload<ReportThreadRequest>,
) -> Result<&'static str, ApiError> {
    let thread_id = parse_id(&req.thread_id);
    state.board.report_thread(&thread_id).await?;
    Ok(REPORTED)
}
