use serde::{Deserialize, Serialize};

use crate::services::greeting::GUEST;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceHealthResponse {
    pub status: String,
    pub service: String,
}

/// Query string of `/api/hello/personalized`.
///
/// Repeated `name` values are joined with `,`. The default applies only when
/// `name` is missing; `?name=` yields an empty string.
#[derive(Debug, PartialEq)]
pub struct PersonalizedParams {
    pub name: String,
}

impl PersonalizedParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let names: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == "name")
            .map(|(_, value)| value)
            .collect();

        let name = if names.is_empty() {
            GUEST.to_string()
        } else {
            names.join(",")
        };

        Self { name }
    }
}
