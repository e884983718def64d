//! Environment-driven configuration, read once at startup.

use std::env;

/// Default upstream for the enrichment fetch.
pub const DEFAULT_TODO_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

const DEFAULT_PORT: u16 = 3000;

/// Runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub todo_url: String,
}

impl Config {
    /// Reads `PORT` and `EXTERNAL_TODO_URL`, falling back to defaults.
    /// An unparsable `PORT` falls back rather than aborting.
    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT);
        let todo_url =
            env::var("EXTERNAL_TODO_URL").unwrap_or_else(|_| DEFAULT_TODO_URL.to_owned());
        Self { port, todo_url }
    }
}
