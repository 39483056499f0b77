use axum::{Router, routing::post};
use storage::Database;

use super::handlers::google_forms;

pub fn routes() -> Router<Database> {
    Router::new().route("/google-forms", post(google_forms))
}
