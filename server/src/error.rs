//! Error taxonomy for the client API.
//!
//! `NotFound` and `Consistency` are caller-actionable and surface verbatim
//! with 400. `Unexpected` is logged with its detail and surfaces only as
//! [`GENERIC_ERROR_MESSAGE`] with 500.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use thiserror::Error;

use crate::envelope::ApiResponse;

/// Message returned to callers for every unexpected failure.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred in the application";

/// Failures reported by a [`ClientService`](crate::service::ClientService).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The requested client does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Input or business-rule violation.
    #[error("{0}")]
    Consistency(String),

    /// Anything else: storage failures, broken invariants, bugs.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ServiceError {
    pub fn is_consistency(&self) -> bool {
        matches!(self, ServiceError::NotFound(_) | ServiceError::Consistency(_))
    }
}

impl From<PathRejection> for ServiceError {
    fn from(rejection: PathRejection) -> Self {
        ServiceError::Consistency(rejection.body_text())
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::Consistency(rejection.body_text())
    }
}

/// Axum response wrapper for a failed request.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = if self.0.is_consistency() {
            (StatusCode::BAD_REQUEST, self.0.to_string())
        } else {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_ERROR_MESSAGE.to_string(),
            )
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}
