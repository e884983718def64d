//! Route handlers and application wiring.
//!
//! Handlers own the boundary mapping: request DTOs use `Option` fields so an
//! absent JSON key (or an unparsable body) surfaces as the route's 400
//! rather than a serde error, and typed records are serialized on the way
//! out.

use std::sync::Arc;

use http::StatusCode;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::aggregate;
use crate::error::ApiError;
use crate::external::TaskSource;
use crate::health;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::store::EntityStore;

const DASHBOARD_HTML: &str = include_str!("dashboard.html");

/// Per-process shared state: the store behind its lock, and the external
/// task source.
///
/// The lock makes each create atomic; it is never held across the outbound
/// fetch (handlers snapshot what they need first).
pub struct AppState {
    pub store: Mutex<EntityStore>,
    tasks: Box<dyn TaskSource>,
}

impl AppState {
    pub fn new(tasks: impl TaskSource + 'static) -> Arc<Self> {
        Arc::new(Self { store: Mutex::new(EntityStore::new()), tasks: Box::new(tasks) })
    }
}

/// Builds the full application router over `state`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .get("/", dashboard)
        .get("/users", with_state(Arc::clone(&state), list_users))
        .post("/users", with_state(Arc::clone(&state), create_user))
        .get("/posts", with_state(Arc::clone(&state), list_posts))
        .post("/posts", with_state(Arc::clone(&state), create_post))
        .get("/posts-with-external-data", with_state(state, posts_with_external_data))
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
}

/// Adapts a `(state, request)` handler to the router's `(request)` shape.
fn with_state<F, Fut>(
    state: Arc<AppState>,
    handler: F,
) -> impl Fn(Request) -> Fut + Send + Sync + 'static
where
    F: Fn(Arc<AppState>, Request) -> Fut + Send + Sync + 'static,
{
    move |req| handler(Arc::clone(&state), req)
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn dashboard(_req: Request) -> Response {
    Response::html(DASHBOARD_HTML)
}

async fn list_users(state: Arc<AppState>, _req: Request) -> Response {
    let store = state.store.lock().await;
    Response::json(store.users())
}

#[derive(Default, Deserialize)]
struct CreateUserBody {
    name: Option<String>,
    email: Option<String>,
}

async fn create_user(state: Arc<AppState>, req: Request) -> Result<Response, ApiError> {
    let body: CreateUserBody = req.json().unwrap_or_default();
    let name = body.name.unwrap_or_default();
    let email = body.email.unwrap_or_default();

    let user = state.store.lock().await.create_user(&name, &email)?;
    Ok(Response::builder().status(StatusCode::CREATED).json(&user))
}

async fn list_posts(state: Arc<AppState>, _req: Request) -> Response {
    let store = state.store.lock().await;
    let joined = aggregate::posts_with_authors(store.posts(), store.users());
    Response::json(&joined)
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePostBody {
    title: Option<String>,
    content: Option<String>,
    author_id: Option<u64>,
}

async fn create_post(state: Arc<AppState>, req: Request) -> Result<Response, ApiError> {
    let body: CreatePostBody = req.json().unwrap_or_default();
    let author_id = body.author_id.ok_or(ApiError::MissingField("Missing required fields"))?;
    let title = body.title.unwrap_or_default();
    let content = body.content.unwrap_or_default();

    let post = state.store.lock().await.create_post(&title, &content, author_id)?;
    Ok(Response::builder().status(StatusCode::CREATED).json(&post))
}

async fn posts_with_external_data(
    state: Arc<AppState>,
    _req: Request,
) -> Result<Response, ApiError> {
    // Snapshot under the lock, fetch outside it.
    let (posts, users) = {
        let store = state.store.lock().await;
        (store.posts().to_vec(), store.users().to_vec())
    };

    let enriched = aggregate::posts_with_external(&posts, &users, state.tasks.as_ref()).await?;
    Ok(Response::json(&enriched))
}
