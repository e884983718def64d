//! # corkboard
//!
//! A small users-and-posts JSON API with an embedded HTML dashboard.
//!
//! Two in-memory collections (users, posts) live behind an
//! [`EntityStore`]; creation enforces required fields, email uniqueness,
//! and author existence. Read views join posts to their authors — a
//! dangling reference renders as `"Unknown"` rather than failing — and one
//! demo endpoint merges the post list with a single fact fetched from an
//! external JSON resource, all-or-nothing.
//!
//! The HTTP plumbing is deliberately small: a hyper accept loop with
//! graceful shutdown, a [`matchit`] route table, and typed
//! [`Request`]/[`Response`] values at the boundary.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use corkboard::{app, AppState, Config, Server, TodoClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env();
//!     let state = AppState::new(TodoClient::new(config.todo_url.clone()));
//!
//!     Server::bind(&format!("0.0.0.0:{}", config.port))
//!         .serve(app(state))
//!         .await
//!         .expect("server error");
//! }
//! ```

mod aggregate;
mod config;
mod error;
mod external;
mod health;
mod model;
mod request;
mod response;
mod router;
mod routes;
mod server;
mod store;

pub use config::Config;
pub use error::{ApiError, ServerError};
pub use external::{ExternalError, ExternalTask, TaskSource, TodoClient};
pub use model::{Author, EnrichedPost, Post, PostWithAuthor, User};
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use routes::{app, AppState};
pub use server::Server;
pub use store::EntityStore;
