use super::models::FormField;
use thiserror::Error;

/// Why a title lookup produced no data. Never shown to the user; the
/// resolver folds every variant into [`Resolution::Unresolved`](super::Resolution).
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup request failed: {0}")]
    Transport(String),
    #[error("lookup response could not be parsed: {0}")]
    Parse(String),
}

/// Why a persist request failed.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save request failed: {0}")]
    Transport(String),
    #[error("save rejected with status {0}")]
    Status(u16),
    #[error("save response could not be parsed: {0}")]
    Parse(String),
}

/// A required field was empty when the user asked to save.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ISBN is missing")]
    MissingIsbn,
    #[error("{} is missing", .0.label())]
    MissingField(FormField),
}

impl ValidationError {
    /// The blocking prompt shown for any validation failure.
    pub fn prompt(&self) -> &'static str {
        "Please fill in all fields including location."
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
