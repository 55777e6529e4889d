use crate::error::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Liveness check
///
/// Always answers `up` while the process is serving requests, for any method.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health_handler() -> &'static str {
    tracing::trace!("Health check");
    "up"
}

/// GET /health/ready handler - Readiness check
///
/// Pings the record store. Returns 200 OK if it is reachable, 503 Service
/// Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH_READY,
    responses(
        (status = 200, description = "Store is reachable", body = HealthResponse),
        (status = 503, description = "Store is unreachable", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn ready_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, Json<UnhealthyResponse>)> {
    match state.service.ping().await {
        Ok(_) => {
            tracing::debug!("Readiness check passed ({:?} store)", state.config.store_backend);
            Ok((
                StatusCode::OK,
                Json(HealthResponse {
                    status: "ready".to_string(),
                }),
            ))
        }
        Err(e) => {
            tracing::error!("Readiness check failed: {:#}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyResponse {
                    status: "unavailable".to_string(),
                    error: format!("Cannot connect to database: {}", e),
                }),
            ))
        }
    }
}
