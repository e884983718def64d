//! Radix-tree request router.
//!
//! One [`matchit`] tree per HTTP method, built once at startup. Handlers are
//! async closures boxed behind a common signature; the only per-request cost
//! is an `Arc` clone and one virtual call. [`Router::dispatch`] is the
//! single entry point — the server loop feeds it, and integration tests can
//! call it directly without opening a socket.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use http::{Method, StatusCode};
use matchit::Router as MatchitRouter;
use serde_json::json;
use tracing::info;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;
type BoxedHandler = Arc<dyn Fn(Request) -> BoxFuture + Send + Sync + 'static>;

/// The application router.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Registers a GET handler. Returns `self` for chaining.
    pub fn get<F, Fut, R>(self, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        self.on(Method::GET, path, handler)
    }

    /// Registers a POST handler. Returns `self` for chaining.
    pub fn post<F, Fut, R>(self, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        self.on(Method::POST, path, handler)
    }

    /// Registers a handler for a method + path pair.
    ///
    /// Any `async fn(Request) -> impl IntoResponse` fits, as does a closure
    /// capturing shared state.
    ///
    /// # Panics
    ///
    /// Panics on a malformed or conflicting route pattern. Routes are
    /// registered once at startup; a bad table should stop the process.
    pub fn on<F, Fut, R>(mut self, method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        let handler: BoxedHandler = Arc::new(move |req| {
            let fut = handler(req);
            Box::pin(async move { fut.await.into_response() })
        });
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Routes one request to its handler and logs the outcome.
    ///
    /// An unmatched method + path pair gets the service's JSON 404 — there
    /// is no separate 405 surface.
    pub async fn dispatch(&self, req: Request) -> Response {
        let method = req.method().clone();
        let path = req.path().to_owned();
        let start = Instant::now();

        let handler = self
            .routes
            .get(&method)
            .and_then(|tree| tree.at(&path).ok())
            .map(|matched| Arc::clone(matched.value));

        let response = match handler {
            Some(handler) => (*handler)(req).await,
            None => {
                Response::builder().status(StatusCode::NOT_FOUND).json(&json!({"message": "Not Found"}))
            }
        };

        info!(
            method = %method,
            path = %path,
            status = response.status_code().as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "request"
        );
        response
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
