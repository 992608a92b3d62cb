use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Body missing, not JSON, empty, or not shaped like a submission
    #[error("Invalid or empty JSON payload: {0}")]
    InvalidPayload(String),
    /// Body exceeded the request size limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
    /// The transactional write failed and was rolled back
    #[error("Failed to save asset: {details}")]
    PersistenceFailed { details: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidPayload(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid or empty JSON payload" }),
            ),
            ApiError::PayloadTooLarge(_) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                json!({ "error": "Payload too large" }),
            ),
            ApiError::PersistenceFailed { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to save asset", "details": details }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

// DbError to ApiError conversion implementation
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::PersistenceFailed {
            details: err.details().to_string(),
        }
    }
}
