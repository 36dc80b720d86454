use shared_types::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Caller passed something other than a string
    #[error("Invalid input: expected a string, got {0}")]
    InvalidInput(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("Pattern for term '{term}' produced an empty match")]
    EmptyMatch { term: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
