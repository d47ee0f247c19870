use crate::models::greeting::{MessageResponse, PersonalizedParams, ServiceHealthResponse};
use axum::{extract::Query, Json};
use tracing::debug;

pub const SERVICE_NAME: &str = "SpringPipelineDemo";

pub async fn handle_hello() -> Json<MessageResponse> {
    debug!(target: "greeting", "hello requested");
    Json(MessageResponse {
        message: "Hello, World!".to_string(),
        status: "success".to_string(),
    })
}

// Plain concatenation: an explicit empty name is not replaced by the default.
pub async fn handle_hello_personalized(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<MessageResponse> {
    let params = PersonalizedParams::from_pairs(pairs);
    debug!(target: "greeting", name = %params.name, "personalized hello requested");
    Json(MessageResponse {
        message: format!("Hello, {}!", params.name),
        status: "success".to_string(),
    })
}

pub async fn handle_health() -> Json<ServiceHealthResponse> {
    debug!(target: "greeting", "service health requested");
    Json(ServiceHealthResponse {
        status: "UP".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
