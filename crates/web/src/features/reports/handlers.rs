use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::report::{AthleteReport, ReportFilters},
};

use crate::error::ApiResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/reports/athletes",
    params(ReportFilters),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Filtered athlete report", body = AthleteReport),
        (status = 401, description = "Unauthorized")
    ),
    tag = "reports"
)]
pub async fn athlete_report(
    State(db): State<Database>,
    Query(filters): Query<ReportFilters>,
) -> ApiResult<Response> {
    let report = services::athlete_report(db.pool(), filters).await?;

    Ok(Json(report).into_response())
}
