use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{Customer, CustomerData};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "customer-service API",
        version = "1.0.0",
        description = "CRUD service for customer records backed by Google Cloud Spanner"
    ),
    paths(
        handlers::health::health_handler,
        handlers::health::ready_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::replace::replace_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Customer,
            CustomerData,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "customer", description = "Customer record operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{send, setup_test_app};
    use axum::http::StatusCode;

    #[test]
    fn test_openapi_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/health"));
        assert!(paths.iter().any(|p| p.as_str() == "/health/ready"));
        assert!(paths.iter().any(|p| p.as_str() == "/v1/customer"));
        assert!(paths.iter().any(|p| p.as_str() == "/v1/customer/{name}"));
    }

    #[tokio::test]
    async fn test_openapi_json_served() {
        let app = setup_test_app(&[]).await;

        let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["info"]["title"], "customer-service API");
    }
}
