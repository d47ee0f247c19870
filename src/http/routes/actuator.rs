use crate::services::actuator::handle_actuator_health;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/actuator/health", get(handle_actuator_health))
        .with_state(app_state)
}
