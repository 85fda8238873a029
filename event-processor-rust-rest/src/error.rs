use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::constants::{API_NAME, PROCESSING_FAILED_MESSAGE};

/// Failures of the push-message pipeline.
///
/// The status code is the contract with the delivery system: a 4xx tells it to
/// drop the message, a 5xx tells it to redeliver.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid envelope: {0}")]
    InvalidEnvelope(String),

    #[error("Invalid message format")]
    InvalidMessageFormat,

    #[error("Failed to process event: {0}")]
    Processing(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidEnvelope(_) | AppError::InvalidMessageFormat => {
                StatusCode::BAD_REQUEST
            }
            AppError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client errors are terminal; the caller must not retry them.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Text returned to the caller. Internal failures are not described.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidEnvelope(_) | AppError::InvalidMessageFormat => self.to_string(),
            AppError::Processing(_) => PROCESSING_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::InvalidEnvelope(e.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidEnvelope(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::InvalidEnvelope(_) | AppError::InvalidMessageFormat => {
                tracing::warn!("{} Rejected request: {}", API_NAME, self);
            }
            AppError::Processing(e) => {
                tracing::error!("{} Internal error: {:#}", API_NAME, e);
            }
        }

        let body = Json(json!({
            "error": self.public_message(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
