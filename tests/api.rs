//! End-to-end tests over the full application router, external source
//! stubbed. Requests go through [`Router::dispatch`] exactly as the server
//! loop sends them; no socket is involved.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, StatusCode};
use serde_json::{json, Value};

use corkboard::{
    app, AppState, ExternalError, ExternalTask, Request, Response, Router, TaskSource,
};

/// Succeeds with a fixed title, or answers like a broken upstream.
struct StubSource(Option<&'static str>);

#[async_trait]
impl TaskSource for StubSource {
    async fn fetch_task(&self) -> Result<ExternalTask, ExternalError> {
        match self.0 {
            Some(title) => Ok(ExternalTask { title: title.to_owned() }),
            None => Err(ExternalError::Upstream { status: StatusCode::INTERNAL_SERVER_ERROR }),
        }
    }
}

fn harness(source: StubSource) -> Router {
    app(AppState::new(source))
}

async fn get(router: &Router, path: &str) -> Response {
    router.dispatch(Request::new(Method::GET, path, Bytes::new())).await
}

async fn post(router: &Router, path: &str, body: &Value) -> Response {
    let bytes = Bytes::from(serde_json::to_vec(body).expect("request body"));
    router.dispatch(Request::new(Method::POST, path, bytes)).await
}

fn body_json(response: &Response) -> Value {
    serde_json::from_slice(response.body()).expect("json response body")
}

#[tokio::test]
async fn create_user_assigns_sequential_ids() {
    let router = harness(StubSource(None));

    let res = post(&router, "/users", &json!({"name": "John Doe", "email": "john@example.com"}))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);
    let user = body_json(&res);
    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "John Doe");
    assert_eq!(user["email"], "john@example.com");

    let res = post(&router, "/users", &json!({"name": "Jane Doe", "email": "jane@example.com"}))
        .await;
    assert_eq!(body_json(&res)["id"], 2);
}

#[tokio::test]
async fn create_user_with_missing_email_is_400() {
    let router = harness(StubSource(None));

    let res = post(&router, "/users", &json!({"name": "Just a name"})).await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&res)["message"], "Missing name or email");
}

#[tokio::test]
async fn duplicate_email_is_409_and_not_stored() {
    let router = harness(StubSource(None));

    post(&router, "/users", &json!({"name": "Alice", "email": "alice@example.com"})).await;
    let res =
        post(&router, "/users", &json!({"name": "Clone", "email": "alice@example.com"})).await;
    assert_eq!(res.status_code(), StatusCode::CONFLICT);
    assert_eq!(body_json(&res)["message"], "Email already exists");

    let res = get(&router, "/users").await;
    let users = body_json(&res);
    assert_eq!(users.as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn list_users_returns_insertion_order() {
    let router = harness(StubSource(None));

    post(&router, "/users", &json!({"name": "Alice", "email": "alice@example.com"})).await;
    post(&router, "/users", &json!({"name": "Bob", "email": "bob@example.com"})).await;

    let res = get(&router, "/users").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let users = body_json(&res);
    assert_eq!(users[0]["name"], "Alice");
    assert_eq!(users[1]["name"], "Bob");
}

#[tokio::test]
async fn create_post_with_unknown_author_is_404_and_does_not_burn_an_id() {
    let router = harness(StubSource(None));

    let res = post(
        &router,
        "/posts",
        &json!({"title": "Title", "content": "Content", "authorId": 99}),
    )
    .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(&res)["message"], "Author not found");

    // After the failure, the first successful post still gets id 1.
    post(&router, "/users", &json!({"name": "Jane", "email": "jane@example.com"})).await;
    let res = post(
        &router,
        "/posts",
        &json!({"title": "Title", "content": "Content", "authorId": 1}),
    )
    .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);
    assert_eq!(body_json(&res)["id"], 1);
}

#[tokio::test]
async fn create_post_with_missing_fields_is_400() {
    let router = harness(StubSource(None));

    let res = post(&router, "/posts", &json!({"title": "Only a title"})).await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&res)["message"], "Missing required fields");
}

#[tokio::test]
async fn listed_posts_embed_their_author() {
    let router = harness(StubSource(None));

    post(&router, "/users", &json!({"name": "Jane Doe", "email": "jane@example.com"})).await;
    post(
        &router,
        "/posts",
        &json!({"title": "My First Post", "content": "Hello World", "authorId": 1}),
    )
    .await;

    let res = get(&router, "/posts").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let posts = body_json(&res);
    assert_eq!(posts[0]["title"], "My First Post");
    assert_eq!(posts[0]["authorId"], 1);
    assert_eq!(posts[0]["author"]["name"], "Jane Doe");
}

#[tokio::test]
async fn external_listing_combines_local_and_fetched_data() {
    let router = harness(StubSource(Some("delectus aut autem")));

    post(&router, "/users", &json!({"name": "Jane Doe", "email": "jane@example.com"})).await;
    post(
        &router,
        "/posts",
        &json!({"title": "My First Post", "content": "Hello World", "authorId": 1}),
    )
    .await;

    let res = get(&router, "/posts-with-external-data").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let posts = body_json(&res);
    assert_eq!(posts.as_array().expect("array").len(), 1);
    assert_eq!(posts[0]["title"], "My First Post");
    assert_eq!(posts[0]["author"]["name"], "Jane Doe");
    assert_eq!(posts[0]["externalInfo"], "External task: \"delectus aut autem\"");
}

#[tokio::test]
async fn external_listing_fails_closed_when_the_upstream_does() {
    let router = harness(StubSource(None));

    post(&router, "/users", &json!({"name": "Jane Doe", "email": "jane@example.com"})).await;
    post(
        &router,
        "/posts",
        &json!({"title": "My First Post", "content": "Hello World", "authorId": 1}),
    )
    .await;

    let res = get(&router, "/posts-with-external-data").await;
    assert_eq!(res.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(&res);
    assert_eq!(body["message"], "Error fetching combined data");
    assert_eq!(body["error"], "Failed to fetch external data");
    // All-or-nothing: no post data alongside the error.
    assert!(body.get("0").is_none());
    assert!(body.as_array().is_none());
}

#[tokio::test]
async fn unmatched_routes_get_a_json_404() {
    let router = harness(StubSource(None));

    let res = get(&router, "/non-existent-path").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(&res)["message"], "Not Found");

    // Wrong method on a known path is also unmatched.
    let res = post(&router, "/posts-with-external-data", &json!({})).await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_serves_html() {
    let router = harness(StubSource(None));

    let res = get(&router, "/").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(res.content_type(), Some("text/html; charset=utf-8"));
    assert!(res.body().starts_with(b"<!DOCTYPE html>"));
}

#[tokio::test]
async fn health_probes_answer() {
    let router = harness(StubSource(None));

    assert_eq!(get(&router, "/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(get(&router, "/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_json_body_counts_as_missing_fields() {
    let router = harness(StubSource(None));

    let res = router
        .dispatch(Request::new(Method::POST, "/users", Bytes::from_static(b"not json")))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&res)["message"], "Missing name or email");
}
