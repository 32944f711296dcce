//! Router fixture
//!
//! Builds the full application router over a fresh `MemoryStore` and drives
//! it in-process with `tower::ServiceExt::oneshot`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use blogd::backend::auth::tokens::TokenService;
use blogd::backend::repository::MemoryStore;
use blogd::backend::routes::create_router;
use blogd::backend::server::AppState;

use crate::common::auth_helpers::auth_header;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub router: Router,
    pub tokens: Arc<TokenService>,
    pub store: MemoryStore,
}

impl TestApp {
    pub fn new() -> Self {
        let tokens = Arc::new(TokenService::new(TEST_SECRET).expect("token service"));
        let store = MemoryStore::new();
        let state = AppState::new(
            tokens.clone(),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Duration::from_secs(60),
        );

        Self {
            router: create_router(state),
            tokens,
            store,
        }
    }

    /// Send one request and return the status with the decoded body
    ///
    /// Bodies that are not JSON come back as `Value::String`; empty bodies
    /// as `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).expect("serialize body")))
                .expect("build request"),
            None => builder.body(Body::empty()).expect("build request"),
        };

        self.dispatch(request).await
    }

    /// Send a body verbatim, for requests that are not valid JSON
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: &'static str,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = content_type {
            builder = builder.header(header::CONTENT_TYPE, value);
        }
        let request = builder.body(Body::from(body)).expect("build request");
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let auth = token.map(auth_header);
        self.send(Method::GET, uri, auth.as_deref(), None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let auth = token.map(auth_header);
        self.send(Method::POST, uri, auth.as_deref(), Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let auth = token.map(auth_header);
        self.send(Method::PATCH, uri, auth.as_deref(), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let auth = token.map(auth_header);
        self.send(Method::DELETE, uri, auth.as_deref(), None).await
    }
}
