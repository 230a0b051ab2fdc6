use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status value carried by every error envelope
pub const ERROR_STATUS: &str = "Error";

/// Uniform error body returned for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<Map<String, Value>>,
}

impl ApiErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ERROR_STATUS.to_string(),
            message: message.into(),
            additional_info: None,
        }
    }

    /// Attach extra details; an empty map is dropped so it never reaches the wire
    pub fn with_additional_info(mut self, info: Map<String, Value>) -> Self {
        self.additional_info = if info.is_empty() { None } else { Some(info) };
        self
    }
}
