use axum::{routing::{any, get}, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const HEALTH_READY: &str = "/health/ready";
pub const CUSTOMER_LIST: &str = "/v1/customer";
pub const CUSTOMER_ITEM: &str = "/v1/customer/{name}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, any(handlers::health_handler))
        .route(HEALTH_READY, get(handlers::ready_handler))
        .route(
            CUSTOMER_LIST,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            CUSTOMER_ITEM,
            get(handlers::get_handler)
                .put(handlers::replace_handler)
                .patch(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
