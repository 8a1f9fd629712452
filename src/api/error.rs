// src/api/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use super::types::{timestamp, ErrorResponse};
use crate::error::TrainError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<TrainError> for ApiError {
    fn from(e: TrainError) -> Self {
        match e {
            TrainError::InvalidInput(msg) => ApiError::BadRequest(msg),
            e if e.is_upstream() => ApiError::Upstream(e.to_string()),
            e => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(msg) => {
                warn!(msg, "validation error");
                StatusCode::BAD_REQUEST
            }
            ApiError::Upstream(msg) => {
                error!(msg, "error fetching trains");
                StatusCode::BAD_GATEWAY
            }
            ApiError::Internal(msg) => {
                error!(msg, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorResponse { success: false, error: self.to_string(), timestamp: timestamp() };
        (status, Json(body)).into_response()
    }
}
