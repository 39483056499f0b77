use axum::{Router, routing::post};
use storage::Database;

use super::handlers::register_athlete;

pub fn routes() -> Router<Database> {
    Router::new().route("/registrations", post(register_athlete))
}
