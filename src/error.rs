use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for the readiness probe
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type when the store cannot be reached
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps service outcomes and store failures to HTTP status codes. "Not found"
/// and "already exists" carry no body; the rest carry a JSON `ErrorResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// No customer stored under this name
    CustomerNotFound(String),
    /// A customer with this name is already stored
    CustomerAlreadyExists(String),
    /// Request body failed a presence check
    InvalidCustomer(String),
    /// Database operation error
    DatabaseError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Domain outcomes are bare statuses with no body
            ApiError::CustomerNotFound(_) => return StatusCode::NOT_FOUND.into_response(),
            ApiError::CustomerAlreadyExists(_) => return StatusCode::CONFLICT.into_response(),
            ApiError::InvalidCustomer(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid customer: {}", msg),
            ),
            ApiError::DatabaseError(err) => {
                tracing::error!("Request failed with database error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", err),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}
