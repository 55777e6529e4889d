use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /v1/customer/{name} handler - Remove a customer
#[utoipa::path(
    delete,
    path = routes::CUSTOMER_ITEM,
    params(
        ("name" = String, Path, description = "Customer name")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "customer"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !state.service.delete(&name).await? {
        return Err(ApiError::CustomerNotFound(name));
    }

    tracing::info!("Deleted customer: {}", name);
    Ok(StatusCode::NO_CONTENT)
}
