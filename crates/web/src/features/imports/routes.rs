use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::post,
};
use storage::Database;

use super::handlers::{commit_import, upload_spreadsheet};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys, max_upload_bytes: usize) -> Router<Database> {
    Router::new()
        .route(
            "/excel",
            post(upload_spreadsheet).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/commit", post(commit_import))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
