use crate::error::{ApiError, ErrorResponse};
use crate::models::{Customer, CustomerData};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// PATCH /v1/customer/{name} handler - Merge into a customer's details
///
/// Only non-empty fields of the body overwrite the stored values.
#[utoipa::path(
    patch,
    path = routes::CUSTOMER_ITEM,
    params(
        ("name" = String, Path, description = "Customer name")
    ),
    request_body = CustomerData,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "customer"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(data): Json<CustomerData>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    match state.service.update(data.into_customer(name.clone())).await? {
        Some(customer) => {
            tracing::info!("Updated customer: {}", name);
            Ok((StatusCode::OK, Json(customer)))
        }
        None => Err(ApiError::CustomerNotFound(name)),
    }
}
