//! Post and comment API integration tests

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{register_and_login, TestApp};

#[tokio::test]
async fn test_post_lifecycle() {
    let app = TestApp::new();
    let alice = register_and_login(&app, "alice", "pw").await;

    let (status, created) = app
        .post("/api/posts", Some(&alice), json!({ "title": "First", "content": "Hello" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["author_id"], "alice");
    let id = created["id"].as_str().unwrap().to_string();
    let uri = format!("/api/posts/{}", id);

    let (status, list) = app.get("/api/posts", Some(&alice)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, fetched) = app.get(&uri, Some(&alice)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // Empty fields keep their value
    let (status, updated) = app
        .patch(&uri, Some(&alice), json!({ "title": "", "content": "Changed" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "First");
    assert_eq!(updated["content"], "Changed");

    // The cached copy reflects the update
    let (_, fetched) = app.get(&uri, Some(&alice)).await;
    assert_eq!(fetched["content"], "Changed");

    let (status, _) = app.delete(&uri, Some(&alice)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&uri, Some(&alice)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_requires_title() {
    let app = TestApp::new();
    let alice = register_and_login(&app, "alice", "pw").await;

    let (status, _) = app
        .post("/api/posts", Some(&alice), json!({ "title": "", "content": "x" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_post_id() {
    let app = TestApp::new();
    let alice = register_and_login(&app, "alice", "pw").await;

    let (status, _) = app.get("/api/posts/not-a-uuid", Some(&alice)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_comments_flow() {
    let app = TestApp::new();
    let alice = register_and_login(&app, "alice", "pw").await;
    let bob = register_and_login(&app, "bob", "pw").await;

    let (_, post) = app
        .post("/api/posts", Some(&alice), json!({ "title": "Topic", "content": "..." }))
        .await;
    let post_id = post["id"].as_str().unwrap();
    let comments_uri = format!("/api/posts/{}/comments", post_id);

    let (status, comment) = app
        .post(&comments_uri, Some(&bob), json!({ "content": "Great post" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(comment["username"], "bob");
    assert_eq!(comment["post_id"], post["id"]);

    let (status, for_post) = app.get(&comments_uri, Some(&alice)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(for_post.as_array().unwrap().len(), 1);

    let (status, all) = app.get("/api/comments", Some(&alice)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 1);

    // Deleting the post removes its comments
    let (status, _) = app.delete(&format!("/api/posts/{}", post_id), Some(&alice)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, all) = app.get("/api/comments", Some(&alice)).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    let app = TestApp::new();
    let alice = register_and_login(&app, "alice", "pw").await;

    let uri = format!("/api/posts/{}/comments", uuid::Uuid::new_v4());
    let (status, _) = app.post(&uri, Some(&alice), json!({ "content": "hi" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
