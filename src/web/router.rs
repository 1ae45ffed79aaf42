//! Router configuration for the web API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::dto::{
    CreateReplyRequest, CreateThreadRequest, DeleteReplyRequest, DeleteThreadRequest,
    ReportReplyRequest, ReportThreadRequest,
};
use super::handlers::{self, AppState};
use super::middleware::create_cors_layer;
use crate::board::{ReplyView, ThreadView};

/// OpenAPI document for the board API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::threads::list_threads,
        handlers::threads::create_thread,
        handlers::threads::delete_thread,
        handlers::threads::report_thread,
        handlers::replies::get_thread,
        handlers::replies::create_reply,
        handlers::replies::delete_reply,
        handlers::replies::report_reply,
    ),
    components(schemas(
        ThreadView,
        ReplyView,
        CreateThreadRequest,
        DeleteThreadRequest,
        ReportThreadRequest,
        CreateReplyRequest,
        DeleteReplyRequest,
        ReportReplyRequest,
    )),
    tags(
        (name = "threads", description = "Threads on a board"),
        (name = "replies", description = "Replies within a thread")
    )
)]
pub struct ApiDoc;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let thread_routes = Router::new().route(
        "/:board",
        get(handlers::list_threads)
            .post(handlers::create_thread)
            .delete(handlers::delete_thread)
            .put(handlers::report_thread),
    );

    let reply_routes = Router::new().route(
        "/:board",
        get(handlers::get_thread)
            .post(handlers::create_reply)
            .delete(handlers::delete_reply)
            .put(handlers::report_reply),
    );

    let api_routes = Router::new()
        .nest("/threads", thread_routes)
        .nest("/replies", reply_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the Swagger UI router serving the OpenAPI document.
pub fn create_swagger_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardService;
    use crate::config::BoardConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let state = Arc::new(AppState::new(BoardService::in_memory(BoardConfig::default())));
        create_router(state, &[])
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = create_health_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_unknown_board_lists_empty() {
        let response = test_router()
            .oneshot(Request::get("/api/threads/nowhere").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"[]");
    }

    #[test]
    fn test_openapi_lists_board_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/threads/{board}"));
        assert!(doc.paths.paths.contains_key("/api/replies/{board}"));
    }
}
