//! Error type for the HTTP layer.
//!
//! Every failure leaves the service as `{ "error": "<message>" }`. Internal
//! details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// User-facing message for any comparison failure that is not the caller's
/// region choice.
pub const COMPARISON_FAILED: &str = "Failed to process comparison";

#[derive(Debug, Error)]
pub enum AppError {
    /// The request body was not a JSON object.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Region code outside the catalog.
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownRegion(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedBody(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedBody(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::UnknownRegion(_) => self.to_string(),
            AppError::MalformedBody(_) | AppError::Internal(_) => {
                error!("Comparison request failed: {}", self);
                COMPARISON_FAILED.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
