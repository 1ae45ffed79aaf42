//! Shared helpers for the web API tests.

#![allow(dead_code)]

use anonboard::config::BoardConfig;
use anonboard::web::handlers::AppState;
use anonboard::web::router::create_router;
use anonboard::BoardService;
use axum_test::{TestResponse, TestServer};
use serde_json::{json, Value};
use std::sync::Arc;

/// Create a test server over a fresh in-memory board.
pub fn create_test_server() -> (TestServer, BoardService) {
    create_test_server_with(BoardConfig::default())
}

/// Create a test server with custom listing windows.
pub fn create_test_server_with(config: BoardConfig) -> (TestServer, BoardService) {
    let board = BoardService::in_memory(config);
    let app_state = Arc::new(AppState::new(board.clone()));
    let router = create_router(app_state, &[]);
    let server = TestServer::new(router).expect("Failed to create test server");
    (server, board)
}

/// Post a thread and return the created thread JSON.
pub async fn create_thread(server: &TestServer, board: &str, text: &str, password: &str) -> Value {
    let response = server
        .post(&format!("/api/threads/{}", board))
        .json(&json!({ "text": text, "delete_password": password }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

/// Post a reply and return the updated thread JSON.
pub async fn create_reply(
    server: &TestServer,
    board: &str,
    thread_id: &str,
    text: &str,
    password: &str,
) -> Value {
    let response = server
        .post(&format!("/api/replies/{}", board))
        .json(&json!({
            "thread_id": thread_id,
            "text": text,
            "delete_password": password
        }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

/// List a board.
pub async fn list_threads(server: &TestServer, board: &str) -> Vec<Value> {
    let response = server.get(&format!("/api/threads/{}", board)).await;
    response.assert_status_ok();
    response.json::<Vec<Value>>()
}

/// Fetch a thread with all replies.
pub async fn get_thread(server: &TestServer, board: &str, thread_id: &str) -> TestResponse {
    server
        .get(&format!("/api/replies/{}", board))
        .add_query_param("thread_id", thread_id)
        .await
}

/// Extract the `_id` of a thread or reply.
pub fn id_of(value: &Value) -> String {
    value["_id"].as_str().expect("missing _id").to_string()
}

/// Assert that no moderation fields leak into a thread object or its replies.
pub fn assert_redacted(thread: &Value) {
    let obj = thread.as_object().expect("thread is an object");
    assert!(!obj.contains_key("delete_password"));
    assert!(!obj.contains_key("reported"));
    for reply in thread["replies"].as_array().expect("replies is an array") {
        let reply = reply.as_object().expect("reply is an object");
        assert!(!reply.contains_key("delete_password"));
        assert!(!reply.contains_key("reported"));
    }
}
