use crate::models::actuator::ActuatorHealthResponse;
use crate::state::AppState;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

pub const ACTUATOR_CONTENT_TYPE: &str = "application/vnd.spring-boot.actuator.v3+json";

pub async fn handle_actuator_health(State(app_state): State<Arc<AppState>>) -> Response {
    debug!(
        target: "greeting",
        service = %app_state.config.logging.service,
        "actuator health requested"
    );
    let response = ActuatorHealthResponse {
        status: "UP".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };

    ([(header::CONTENT_TYPE, ACTUATOR_CONTENT_TYPE)], Json(response)).into_response()
}
