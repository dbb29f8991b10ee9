use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error("Recipe corpus unavailable: {0}")]
    CorpusUnavailable(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Match threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),

    #[error("Invalid input")]
    Invalid,

    #[error("Internal server error")]
    InternalServerError,
}
