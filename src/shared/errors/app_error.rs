use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The paired review + movie aggregate write could not be completed as one unit.
    #[error("Consistency failure: {0}")]
    ConsistencyFailure(String),

    /// Transport or connection failure reported by the storage collaborator.
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Errors raised before any state was touched.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_)
                | AppError::Forbidden(_)
                | AppError::Conflict(_)
                | AppError::ValidationError(_)
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::ValidationError(format!("Invalid UUID: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
