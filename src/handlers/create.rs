use crate::error::{ApiError, ErrorResponse};
use crate::models::Customer;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /v1/customer handler - Create a customer
#[utoipa::path(
    post,
    path = routes::CUSTOMER_LIST,
    request_body = Customer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Customer name is empty", body = ErrorResponse),
        (status = 409, description = "Customer already exists"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "customer"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(customer): Json<Customer>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    if customer.name.is_empty() {
        return Err(ApiError::InvalidCustomer("name must not be empty".to_string()));
    }

    let name = customer.name.clone();
    match state.service.create(customer).await? {
        Some(created) => {
            tracing::info!("Created customer: {}", name);
            Ok((StatusCode::CREATED, Json(created)))
        }
        None => Err(ApiError::CustomerAlreadyExists(name)),
    }
}
