use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use storage::{
    Database,
    dto::{athlete::CreateAthleteRequest, common::CreatedResponse},
};

use crate::error::ApiResult;

use super::services;

#[utoipa::path(
    post,
    path = "/api/public/registrations",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Registration received", body = CreatedResponse),
        (status = 400, description = "Missing or invalid field, or CPF already registered")
    ),
    tag = "public"
)]
pub async fn register_athlete(
    State(db): State<Database>,
    Json(payload): Json<Value>,
) -> ApiResult<Response> {
    let id = services::register(db.pool(), &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Cadastro realizado com sucesso!".to_string(),
            id,
        }),
    )
        .into_response())
}
