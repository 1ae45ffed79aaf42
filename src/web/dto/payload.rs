//! Request body extractor accepting JSON or HTML form encoding.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::web::error::ApiError;

/// Body extractor for board mutations.
///
/// - `application/json` bodies are decoded as JSON
/// - any other declared content type goes through the form decoder
/// - a request without a content type yields `T::default()`
///
/// Undecodable bodies are rejected with 400.
#[derive(Debug, Clone, Default)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase());

        match content_type {
            None => Ok(Payload(T::default())),
            Some(ct) if ct.starts_with("application/json") => {
                let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
                    tracing::debug!("Rejected JSON body: {}", e.body_text());
                    ApiError::bad_request(e.body_text())
                })?;
                Ok(Payload(value))
            }
            Some(_) => {
                let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
                    tracing::debug!("Rejected form body: {}", e.body_text());
                    ApiError::bad_request(e.body_text())
                })?;
                Ok(Payload(value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::dto::CreateThreadRequest;
    use crate::web::error::ErrorCode;
    use axum::body::Body;

    async fn extract(content_type: Option<&str>, body: &str) -> Result<CreateThreadRequest, ApiError> {
        let mut builder = Request::builder().method("POST").uri("/api/threads/test");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body.to_string())).unwrap();
        Payload::<CreateThreadRequest>::from_request(req, &())
            .await
            .map(|Payload(value)| value)
    }

    #[tokio::test]
    async fn test_json_body() {
        let req = extract(
            Some("application/json"),
            r#"{"text":"hi","delete_password":"pw"}"#,
        )
        .await
        .unwrap();
        assert_eq!(req.text, "hi");
        assert_eq!(req.delete_password, "pw");
    }

    #[tokio::test]
    async fn test_form_body() {
        let req = extract(
            Some("application/x-www-form-urlencoded"),
            "text=hello+there&delete_password=pw",
        )
        .await
        .unwrap();
        assert_eq!(req.text, "hello there");
        assert_eq!(req.delete_password, "pw");
    }

    #[tokio::test]
    async fn test_no_content_type() {
        let req = extract(None, "").await.unwrap();
        assert_eq!(req.text, "");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let err = extract(Some("application/json"), "{not json").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadRequest);
    }
}
