pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod openapi;

use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use middleware::auth::ApiKeys;
use openapi::ApiDoc;

/// Builds the full application router. Shared by the server binary and the
/// integration tests.
pub fn build_router(db: Database, api_keys: ApiKeys, max_upload_bytes: usize) -> Router {
    let api = Router::new()
        .nest("/athletes", features::athletes::routes::routes(api_keys.clone()))
        .nest(
            "/imports",
            features::imports::routes::routes(api_keys.clone(), max_upload_bytes),
        )
        .nest("/public", features::registration::routes::routes())
        .nest("/webhooks", features::webhook::routes::routes())
        .nest("/settings", features::settings::routes::routes(api_keys.clone()))
        .nest("/reports", features::reports::routes::routes(api_keys));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(features::health::routes::routes())
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
