use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImporterError>;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] storage::error::StorageError),

    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(String),

    #[error("Spreadsheet has no data rows")]
    EmptySpreadsheet,

    #[error("Payload must be a JSON object")]
    NotAnObject,

    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingFields {
        fields: Vec<&'static str>,
        received: Vec<String>,
    },

    #[error("Validation error: {}", .0.join("; "))]
    ValidationError(Vec<String>),

    #[error("CPF already registered")]
    DuplicateCpf,

    #[error("Import error: {0}")]
    ImportError(String),
}

impl ImporterError {
    pub fn is_duplicate_cpf(&self) -> bool {
        match self {
            ImporterError::DuplicateCpf => true,
            ImporterError::StorageError(e) => e.is_duplicate_cpf(),
            _ => false,
        }
    }
}
