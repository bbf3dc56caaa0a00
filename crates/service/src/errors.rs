use thiserror::Error;

use models::errors::ModelError;

/// Business errors for the user and catalog workflows.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("invalid credentials")]
    Unauthorized,
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl ServiceError {
    /// Human-readable message for the HTTP boundary, without the taxonomy prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Conflict(msg) => msg.clone(),
            Self::Unauthorized => "Invalid username or password".to_string(),
            Self::Hash(_) | Self::Storage(_) => self.to_string(),
        }
    }
}
