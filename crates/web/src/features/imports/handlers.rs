use axum::{
    Json,
    extract::{Multipart, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::import::{CommitImportRequest, CommitReport, ImportReport},
};

use crate::error::{ApiResult, WebError};

use super::services;

/// Multipart field carrying the workbook
pub const UPLOAD_FIELD: &str = "arquivo";

#[utoipa::path(
    post,
    path = "/api/imports/excel",
    request_body(content_type = "multipart/form-data", description = "Spreadsheet in the `arquivo` field"),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Validation report; nothing is stored", body = ImportReport),
        (status = 400, description = "No file, empty or unreadable spreadsheet"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "imports"
)]
pub async fn upload_spreadsheet(
    State(db): State<Database>,
    mut multipart: Multipart,
) -> ApiResult<Response> {
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or("planilha").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| WebError::BadRequest(e.to_string()))?;

        tracing::info!("Received spreadsheet {} ({} bytes)", name, data.len());
        file = Some(data);
        break;
    }

    let data = file.ok_or_else(|| WebError::BadRequest("Nenhum arquivo enviado".to_string()))?;
    let report = services::validate_spreadsheet(db.pool(), &data).await?;

    Ok(Json(report).into_response())
}

#[utoipa::path(
    post,
    path = "/api/imports/commit",
    request_body = CommitImportRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Per-row outcome of the import", body = CommitReport),
        (status = 400, description = "No athletes supplied"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "imports"
)]
pub async fn commit_import(
    State(db): State<Database>,
    Json(req): Json<CommitImportRequest>,
) -> ApiResult<Response> {
    if req.athletes.is_empty() {
        return Err(WebError::BadRequest(
            "Nenhum atleta para importar".to_string(),
        ));
    }

    let report = services::commit_rows(db.pool(), &req.athletes).await;

    Ok(Json(report).into_response())
}
