//! Service entry point.

use corkboard::{app, AppState, Config, Server, TodoClient};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let state = AppState::new(TodoClient::new(config.todo_url.clone()));

    Server::bind(&format!("0.0.0.0:{}", config.port))
        .serve(app(state))
        .await
        .expect("server error");
}
