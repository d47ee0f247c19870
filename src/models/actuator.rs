use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ActuatorHealthResponse {
    pub status: String,
    pub timestamp: String,
}
