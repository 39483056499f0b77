use chrono::Local;
use importer::{ImportContext, ImporterError, PUBLIC_FORM, register_from_payload};
use serde_json::Value;
use sqlx::PgPool;
use storage::{error::DUPLICATE_CPF_MESSAGE, models::RegistrationSource};

use crate::error::WebError;

/// Validate and store a self-registration. Returns the new athlete id.
///
/// Only the first missing field is reported and a taken CPF is a plain
/// 400, which is what the public form expects.
pub async fn register(pool: &PgPool, payload: &Value) -> Result<i32, WebError> {
    let ctx = ImportContext::new(pool.clone());

    let athlete = register_from_payload(
        payload,
        &PUBLIC_FORM,
        &ctx,
        Local::now().date_naive(),
        RegistrationSource::Publico,
    )
    .await
    .map_err(|e| match e {
        ImporterError::MissingFields { fields, .. } => WebError::BadRequest(format!(
            "Campo {} é obrigatório",
            fields.first().copied().unwrap_or("desconhecido")
        )),
        e if e.is_duplicate_cpf() => WebError::BadRequest(DUPLICATE_CPF_MESSAGE.to_string()),
        e => WebError::from(e),
    })?;

    Ok(athlete.id)
}
