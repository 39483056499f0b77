use thiserror::Error;

pub const DUPLICATE_CPF_MESSAGE: &str = "CPF já cadastrado no sistema";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    /// True for a rejected insert caused by an already registered CPF,
    /// whether or not it was translated yet.
    pub fn is_duplicate_cpf(&self) -> bool {
        match self {
            StorageError::ConstraintViolation(msg) => msg == DUPLICATE_CPF_MESSAGE,
            other => other.is_unique_violation(),
        }
    }

    /// The only unique column on `athletes` is `cpf`.
    pub(crate) fn translate_cpf_violation(self) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(DUPLICATE_CPF_MESSAGE.to_string())
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_a_duplicate() {
        assert!(!StorageError::NotFound.is_duplicate_cpf());
        assert!(!StorageError::NotFound.is_unique_violation());
    }

    #[test]
    fn test_translated_violation_is_a_duplicate() {
        let err = StorageError::ConstraintViolation(DUPLICATE_CPF_MESSAGE.to_string());
        assert!(err.is_duplicate_cpf());
        assert!(!StorageError::ConstraintViolation("other".into()).is_duplicate_cpf());
    }

    #[test]
    fn test_translate_keeps_other_errors() {
        let err = StorageError::NotFound.translate_cpf_violation();
        assert!(matches!(err, StorageError::NotFound));
    }
}
