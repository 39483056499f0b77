use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{get_settings, update_settings};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", put(update_settings))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(get_settings)).merge(protected)
}
