use axum::{
    Router, middleware,
    routing::get,
};
use storage::Database;

use super::handlers::{create_athlete, delete_athlete, get_athlete, list_athletes, update_athlete};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_athletes).post(create_athlete))
        .route(
            "/:id",
            get(get_athlete).put(update_athlete).delete(delete_athlete),
        )
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
