use crate::services::hello::{handle_health, handle_hello, handle_hello_personalized};
use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/hello", get(handle_hello))
        .route("/hello/personalized", get(handle_hello_personalized))
        .route("/health", get(handle_health))
        .with_state(app_state)
}
