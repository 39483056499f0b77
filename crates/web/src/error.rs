use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use importer::ImporterError;
use importer::intake::validation_messages;
use serde_json::json;
use std::fmt;
use storage::error::{DUPLICATE_CPF_MESSAGE, StorageError};
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    /// A record that failed the import rules; `details` lists every reason
    InvalidRecord {
        message: String,
        details: Vec<String>,
    },
    MissingFields {
        fields: Vec<&'static str>,
        received: Vec<String>,
    },
    Conflict(String),
    Unauthorized,
    NotFound,
    InternalServerError(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::InvalidRecord { message, details } => {
                write!(f, "{}: {}", message, details.join("; "))
            }
            Self::MissingFields { fields, .. } => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::NotFound => write!(f, "Resource not found"),
            Self::InternalServerError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidRecord { .. } => StatusCode::BAD_REQUEST,
            Self::MissingFields { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::Storage(StorageError::NotFound) | Self::NotFound => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) | Self::Conflict(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                json!({
                    "error": "Validation failed",
                    "details": validation_messages(errors)
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::InvalidRecord { message, details } => {
                json!({
                    "error": message,
                    "details": details
                })
            }
            Self::MissingFields { fields, received } => {
                json!({
                    "error": "Campos obrigatórios não preenchidos",
                    "campos_faltantes": fields,
                    "campos_recebidos": received
                })
            }
            Self::Unauthorized => {
                json!({
                    "error": "Unauthorized"
                })
            }
            Self::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                json!({
                    "error": "An internal error occurred"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<ImporterError> for WebError {
    fn from(error: ImporterError) -> Self {
        match error {
            ImporterError::StorageError(e) => Self::Storage(e),
            ImporterError::DatabaseError(e) => Self::Storage(StorageError::Database(e)),
            ImporterError::DuplicateCpf => Self::Conflict(DUPLICATE_CPF_MESSAGE.to_string()),
            ImporterError::MissingFields { fields, received } => {
                Self::MissingFields { fields, received }
            }
            ImporterError::ValidationError(details) => Self::InvalidRecord {
                message: "Dados inválidos".to_string(),
                details,
            },
            ImporterError::EmptySpreadsheet => Self::BadRequest("Planilha vazia".to_string()),
            ImporterError::SpreadsheetError(msg) => {
                tracing::warn!("Unreadable spreadsheet: {}", msg);
                Self::BadRequest("Não foi possível ler a planilha".to_string())
            }
            e @ (ImporterError::NotAnObject | ImporterError::ParseError(_)) => {
                Self::BadRequest(e.to_string())
            }
            ImporterError::ImportError(msg) => Self::InternalServerError(msg),
        }
    }
}

pub type ApiResult<T> = Result<T, WebError>;
