use chrono::NaiveDate;
use serde_json::Value;
use storage::dto::athlete::{AthleteResponse, CreateAthleteRequest};
use storage::dto::import::{CommitOutcome, CommitReport, ImportReport};
use storage::error::DUPLICATE_CPF_MESSAGE;
use storage::fields::REGISTRATION;
use storage::models::RegistrationSource;
use tracing::{debug, error, info};
use validator::Validate;

use crate::cell::RawRecord;
use crate::intake::{prepare_athlete, validation_messages};
use crate::profile::RowProfile;
use crate::row::RowProcessor;
use crate::traits::AthleteStore;

/// Validates every row in order and aggregates the report.
///
/// Rows are processed one at a time: each duplicate lookup hits the shared
/// store and there is no locking between them.
pub async fn validate_batch<S: AthleteStore + ?Sized>(
    rows: &[(u32, RawRecord)],
    profile: &RowProfile,
    store: &S,
    reference_date: NaiveDate,
) -> ImportReport {
    debug!(
        "Validating {} rows with the {} profile and {} age table",
        rows.len(),
        profile.name,
        profile.categories.name
    );
    let processor = RowProcessor::new(profile, store, reference_date);

    let mut results = Vec::with_capacity(rows.len());
    for (line, record) in rows {
        results.push(processor.process(record, *line).await);
    }

    let report = ImportReport::from_rows(results);
    info!(
        "Validated {} rows: {} valid, {} invalid, {} duplicates, {} new",
        report.total, report.valid, report.invalid, report.duplicates, report.new
    );
    report
}

/// Inserts the rows a caller selected from a validation report.
///
/// Every row is attempted; failures are recorded next to the submitted row
/// and never abort the rest of the batch.
pub async fn commit_import<S: AthleteStore + ?Sized>(
    rows: &[Value],
    store: &S,
    reference_date: NaiveDate,
) -> CommitReport {
    let mut outcomes = Vec::with_capacity(rows.len());

    for row in rows {
        let outcome = match commit_row(row, store, reference_date).await {
            Ok(created) => CommitOutcome {
                success: true,
                athlete: serde_json::to_value(created).unwrap_or_default(),
                error: None,
            },
            Err(message) => CommitOutcome {
                success: false,
                athlete: row.clone(),
                error: Some(message),
            },
        };
        outcomes.push(outcome);
    }

    let report = CommitReport::from_outcomes(outcomes);
    info!(
        "Committed import: {} of {} rows stored, {} failed",
        report.succeeded, report.total, report.failed
    );
    report
}

async fn commit_row<S: AthleteStore + ?Sized>(
    row: &Value,
    store: &S,
    reference_date: NaiveDate,
) -> std::result::Result<AthleteResponse, String> {
    let req: CreateAthleteRequest =
        serde_json::from_value(row.clone()).map_err(|e| format!("Dados inválidos: {e}"))?;
    req.validate()
        .map_err(|e| validation_messages(&e).join("; "))?;

    let athlete = prepare_athlete(
        &req,
        &REGISTRATION,
        reference_date,
        RegistrationSource::Importacao,
    );

    match store.insert(&athlete).await {
        Ok(created) => Ok(AthleteResponse::from(created)),
        Err(e) if e.is_duplicate_cpf() => Err(DUPLICATE_CPF_MESSAGE.to_string()),
        Err(e) => {
            error!("Failed to store imported athlete {}: {}", athlete.cpf, e);
            Err("Erro ao salvar atleta".to_string())
        }
    }
}
