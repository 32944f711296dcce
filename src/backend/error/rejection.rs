/**
 * JSON Body Extraction
 *
 * `JsonBody<T>` deserializes a request body like `axum::Json<T>`, but a
 * rejection (bad syntax, missing field, wrong content type) comes back as a
 * `BackendError` and is rendered with the same `{"error", "status"}` body as
 * every other failure.
 */

use axum::{
    extract::{FromRequest, Request},
    response::Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::types::BackendError;

/// JSON request body with backend-shaped rejections
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Credentials {
        username: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let JsonBody(credentials) = JsonBody::<Credentials>::from_request(json_request(r#"{"username":"alice"}"#), &())
            .await
            .unwrap();
        assert_eq!(credentials.username, "alice");
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let err = JsonBody::<Credentials>::from_request(json_request("{ not json"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_field_is_unprocessable() {
        let err = JsonBody::<Credentials>::from_request(json_request("{}"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.message().contains("username"));
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"username":"alice"}"#))
            .unwrap();
        let err = JsonBody::<Credentials>::from_request(request, &()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
