use crate::error::{ApiError, ErrorResponse};
use crate::models::{Customer, CustomerData};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// PUT /v1/customer/{name} handler - Replace a customer's details
///
/// Address and phone number are overwritten with the body's values, including
/// absent or empty ones. Any name in the body is ignored.
#[utoipa::path(
    put,
    path = routes::CUSTOMER_ITEM,
    params(
        ("name" = String, Path, description = "Customer name")
    ),
    request_body = CustomerData,
    responses(
        (status = 200, description = "Customer replaced", body = Customer),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "customer"
)]
pub async fn replace_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(data): Json<CustomerData>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    match state.service.replace(data.into_customer(name.clone())).await? {
        Some(customer) => {
            tracing::info!("Replaced customer: {}", name);
            Ok((StatusCode::OK, Json(customer)))
        }
        None => Err(ApiError::CustomerNotFound(name)),
    }
}
