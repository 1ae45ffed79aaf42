//! Server integration tests.
//!
//! Run the real server on an ephemeral port and talk to it over TCP.

use anonboard::config::{BoardConfig, ServerConfig};
use anonboard::web::WebServer;
use anonboard::BoardService;
use serde_json::Value;
use std::net::SocketAddr;

async fn start_server() -> SocketAddr {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
    };
    let board = BoardService::in_memory(BoardConfig::default());
    WebServer::new(&config, board)
        .expect("Failed to create web server")
        .run_with_addr()
        .await
        .expect("Failed to start web server")
}

#[tokio::test]
async fn test_health_over_tcp() {
    let addr = start_server().await;

    let resp = reqwest::get(format!("http://{}/health", addr)).await.unwrap();
    assert!(resp.status().is_success());
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_post_and_list_over_tcp() {
    let addr = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{}/api/threads/general", addr))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("text=hello&delete_password=pw")
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let created: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();

    let resp = client
        .get(format!("http://{}/api/threads/general", addr))
        .send()
        .await
        .unwrap();
    let listed: Vec<Value> = serde_json::from_str(&resp.text().await.unwrap()).unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["_id"], created["_id"]);
    assert_eq!(listed[0]["text"], "hello");
}

#[tokio::test]
async fn test_unknown_route_over_tcp() {
    let addr = start_server().await;

    let resp = reqwest::get(format!("http://{}/api/boards", addr)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}
