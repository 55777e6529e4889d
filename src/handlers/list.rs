use crate::error::{ApiError, ErrorResponse};
use crate::models::Customer;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// GET /v1/customer handler - List all customers
///
/// Returns every stored customer in store-scan order. An empty store answers
/// 204 No Content rather than an empty array.
#[utoipa::path(
    get,
    path = routes::CUSTOMER_LIST,
    responses(
        (status = 200, description = "All customers", body = [Customer]),
        (status = 204, description = "No customers stored"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "customer"
)]
pub async fn list_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let customers = state.service.list().await?;

    if customers.is_empty() {
        tracing::info!("Listed 0 customers");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    tracing::info!("Listed {} customers", customers.len());
    Ok((StatusCode::OK, Json(customers)).into_response())
}
