use chrono::Local;
use importer::{ImportContext, Result, SPREADSHEET, commit_import, spreadsheet, validate_batch};
use serde_json::Value;
use sqlx::PgPool;
use storage::dto::import::{CommitReport, ImportReport};

/// Read the uploaded workbook and validate every row against the registry
pub async fn validate_spreadsheet(pool: &PgPool, bytes: &[u8]) -> Result<ImportReport> {
    let rows = spreadsheet::read_rows(bytes)?;
    let ctx = ImportContext::new(pool.clone());

    Ok(validate_batch(&rows, &SPREADSHEET, &ctx, Local::now().date_naive()).await)
}

/// Store the rows selected from a validation report
pub async fn commit_rows(pool: &PgPool, rows: &[Value]) -> CommitReport {
    let ctx = ImportContext::new(pool.clone());
    commit_import(rows, &ctx, Local::now().date_naive()).await
}
