use chrono::Local;
use importer::{ImportContext, Result, WEBHOOK_FORM, register_from_payload};
use serde_json::Value;
use sqlx::PgPool;
use storage::models::{Athlete, RegistrationSource};

/// Map a form-automation submission onto an athlete and store it
pub async fn ingest(pool: &PgPool, payload: &Value) -> Result<Athlete> {
    let ctx = ImportContext::new(pool.clone());

    register_from_payload(
        payload,
        &WEBHOOK_FORM,
        &ctx,
        Local::now().date_naive(),
        RegistrationSource::GoogleForms,
    )
    .await
}
