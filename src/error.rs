use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::phone::InvalidPhone;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every variant maps to an HTTP status code and is rendered as
/// `{"detail": ...}`. An empty address on create is not an error; it is
/// answered with a 200 message by the handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Phone number does not match the national format
    #[error(transparent)]
    InvalidPhone(#[from] InvalidPhone),
    /// Lookup found no address for the number
    #[error("address not found")]
    AddressNotFound,
    /// Update targeted a number with no record
    #[error("phone number not found")]
    PhoneNotFound,
    /// Store operation error
    #[error("store error: {0:#}")]
    Store(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPhone(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::AddressNotFound | ApiError::PhoneNotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Store(err)
    }
}
