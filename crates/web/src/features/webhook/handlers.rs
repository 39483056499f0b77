use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use storage::{
    Database,
    dto::athlete::{AthleteSummary, WebhookResponse},
};

use crate::error::ApiResult;

use super::services;

#[utoipa::path(
    post,
    path = "/api/webhooks/google-forms",
    request_body(content_type = "application/json", description = "Form answers keyed by question title or field name"),
    responses(
        (status = 200, description = "Athlete registered", body = WebhookResponse),
        (status = 400, description = "Missing required fields or invalid values"),
        (status = 409, description = "CPF already registered")
    ),
    tag = "public"
)]
pub async fn google_forms(
    State(db): State<Database>,
    Json(payload): Json<Value>,
) -> ApiResult<Response> {
    tracing::debug!("Webhook payload: {}", payload);

    let athlete = services::ingest(db.pool(), &payload).await?;

    Ok(Json(WebhookResponse {
        success: true,
        message: "Atleta cadastrado com sucesso!".to_string(),
        athlete: AthleteSummary::from(athlete),
    })
    .into_response())
}
