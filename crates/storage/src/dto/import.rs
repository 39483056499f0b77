use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of validating one spreadsheet row or webhook payload.
///
/// Field values are already normalized; the record is never stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RowValidationResult {
    #[serde(rename = "linha")]
    pub line: u32,
    #[serde(rename = "nome")]
    pub first_name: String,
    #[serde(rename = "sobrenome")]
    pub last_name: String,
    /// `YYYY-MM-DD` when the input matched a known date shape
    #[serde(rename = "data_nascimento")]
    pub birth_date: String,
    #[serde(rename = "posicao")]
    pub position: String,
    #[serde(rename = "posicao_secundaria", skip_serializing_if = "Option::is_none")]
    pub secondary_position: Option<String>,
    #[serde(rename = "telefone_responsavel")]
    pub guardian_phone: String,
    pub cpf: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "idade")]
    pub age: i32,
    pub status: String,
    #[serde(rename = "valido")]
    pub is_valid: bool,
    #[serde(rename = "erros")]
    pub errors: Vec<String>,
    #[serde(rename = "duplicado")]
    pub is_duplicate: bool,
    /// Wire names of required fields that were absent
    #[serde(skip)]
    pub missing: Vec<&'static str>,
}

impl RowValidationResult {
    /// Valid and not yet registered.
    pub fn is_new(&self) -> bool {
        self.is_valid && !self.is_duplicate
    }
}

/// Validation report returned by the spreadsheet upload
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImportReport {
    pub total: usize,
    #[serde(rename = "validos")]
    pub valid: usize,
    #[serde(rename = "invalidos")]
    pub invalid: usize,
    #[serde(rename = "duplicados")]
    pub duplicates: usize,
    #[serde(rename = "novos")]
    pub new: usize,
    #[serde(rename = "atletas")]
    pub rows: Vec<RowValidationResult>,
}

impl ImportReport {
    pub fn from_rows(rows: Vec<RowValidationResult>) -> Self {
        Self {
            total: rows.len(),
            valid: rows.iter().filter(|r| r.is_valid).count(),
            invalid: rows.iter().filter(|r| !r.is_valid).count(),
            duplicates: rows.iter().filter(|r| r.is_duplicate).count(),
            new: rows.iter().filter(|r| r.is_new()).count(),
            rows,
        }
    }
}

/// Request payload for committing rows that a validation report marked as new
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommitImportRequest {
    /// Rows as returned in `ImportReport.atletas`; report-only keys are ignored
    #[serde(rename = "atletas")]
    #[schema(value_type = Vec<Object>)]
    pub athletes: Vec<serde_json::Value>,
}

/// Per-row result of a commit. On failure `atleta` echoes the submitted row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommitOutcome {
    #[serde(rename = "sucesso")]
    pub success: bool,
    #[serde(rename = "atleta")]
    #[schema(value_type = Object)]
    pub athlete: serde_json::Value,
    #[serde(rename = "erro", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommitReport {
    pub total: usize,
    #[serde(rename = "sucessos")]
    pub succeeded: usize,
    #[serde(rename = "erros")]
    pub failed: usize,
    #[serde(rename = "resultados")]
    pub results: Vec<CommitOutcome>,
}

impl CommitReport {
    pub fn from_outcomes(results: Vec<CommitOutcome>) -> Self {
        let succeeded = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            results,
        }
    }
}
