//! Error handling for the bookshelf HTTP layer
//!
//! Error bodies follow the wire contract: a single `detail` field carrying
//! either a message string (not found, internal) or a list of per-field
//! validation errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Application error types that map to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation error")]
    Validation { detail: Vec<serde_json::Value> },

    #[error("not found: {detail}")]
    NotFound { detail: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Create a validation error from per-field details
    pub fn validation(detail: Vec<serde_json::Value>) -> Self {
        Self::Validation { detail }
    }

    /// Create a not found error with the given detail message
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();

        let (status, detail) = match self {
            ApiError::Validation { detail } => {
                (StatusCode::UNPROCESSABLE_ENTITY, json!(detail))
            }
            ApiError::NotFound { detail } => (StatusCode::NOT_FOUND, json!(detail)),
            ApiError::Internal(e) => {
                // Hide internal error details outside of debug builds.
                let message = if cfg!(debug_assertions) {
                    e.to_string()
                } else {
                    "An internal server error occurred".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, json!(message))
            }
        };

        tracing::error!(
            error_id = %error_id,
            status_code = %status.as_u16(),
            "Request error"
        );

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
