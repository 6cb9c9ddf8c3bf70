use sqlx::error::ErrorKind;
use thiserror::Error;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// Failures raised by repo write operations.
///
/// Database errors are classified on conversion so the API layer can tell a
/// missing record or a broken relation apart from an infrastructure failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record to {action} does not exist: no {model} with id `{id}`")]
    RecordNotFound {
        action: &'static str,
        model: &'static str,
        id: String,
    },

    #[error("Foreign key constraint failed on the field: `{constraint}`")]
    ForeignKeyViolation { constraint: String },

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl StoreError {
    pub fn not_found(action: &'static str, model: &'static str, id: impl Into<String>) -> Self {
        StoreError::RecordNotFound {
            action,
            model,
            id: id.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if matches!(db_err.kind(), ErrorKind::ForeignKeyViolation) {
                return StoreError::ForeignKeyViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        StoreError::Sqlx(e)
    }
}
