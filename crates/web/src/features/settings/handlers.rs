use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::settings::{SettingsResponse, UpdateSettingsRequest},
};
use validator::Validate;

use crate::error::ApiResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "School settings", body = SettingsResponse),
        (status = 404, description = "Settings were never saved")
    ),
    tag = "settings"
)]
pub async fn get_settings(State(db): State<Database>) -> ApiResult<Response> {
    let settings = services::get_settings(db.pool()).await?;

    Ok(Json(SettingsResponse::from(settings)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = UpdateSettingsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Settings saved", body = SettingsResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings"
)]
pub async fn update_settings(
    State(db): State<Database>,
    Json(req): Json<UpdateSettingsRequest>,
) -> ApiResult<Response> {
    req.validate()?;

    let settings = services::save_settings(db.pool(), &req).await?;

    Ok(Json(SettingsResponse::from(settings)).into_response())
}
