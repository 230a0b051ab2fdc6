use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use mongodb::bson;

use crate::core::response::ApiErrorResponse;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// The `Display` output of every variant is the bare message so that it can be
/// handed to clients verbatim in the error envelope.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Caller-fault input errors (empty id/name/email, unparsable payload)
    #[error("{0}")]
    Validation(String),

    /// Identifier that cannot be parsed into the store's key type
    #[error("{0}")]
    InvalidIdentifier(String),

    /// Well-formed identifier with no matching document
    #[error("{0}")]
    NotFound(String),

    /// Any store-level fault, carrying the store's own message
    #[error("{0}")]
    Persistence(String),

    /// Configuration errors
    #[error("{0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiErrorResponse::new(self.to_string()))
    }

    // Every domain error is reported as a client fault.
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}

impl From<bson::ser::Error> for AppError {
    fn from(err: bson::ser::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}

impl From<bson::de::Error> for AppError {
    fn from(err: bson::de::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn invalid_identifier() -> Self {
        AppError::InvalidIdentifier("invalid 'id' provided".to_string())
    }

    pub fn not_found() -> Self {
        AppError::NotFound("no documents in result".to_string())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        AppError::Persistence(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
