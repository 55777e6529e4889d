use crate::error::{ApiError, ErrorResponse};
use crate::models::Customer;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /v1/customer/{name} handler - Retrieve one customer
#[utoipa::path(
    get,
    path = routes::CUSTOMER_ITEM,
    params(
        ("name" = String, Path, description = "Customer name")
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "customer"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    match state.service.read(&name).await? {
        Some(customer) => {
            tracing::info!("Retrieved customer: {}", name);
            Ok((StatusCode::OK, Json(customer)))
        }
        None => {
            tracing::warn!("Customer {} not found", name);
            Err(ApiError::CustomerNotFound(name))
        }
    }
}
