//! Error kinds reported by the fee ledger.

use thiserror::Error;

use super::models::student::StudentId;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid date for {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid monthly fee: '{0}' (expected a non-negative number)")]
    InvalidAmount(String),

    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl LedgerError {
    /// Stable machine-readable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InvalidDate { .. } => "INVALID_DATE",
            LedgerError::MissingField(_) => "MISSING_FIELD",
            LedgerError::InvalidAmount(_) => "INVALID_AMOUNT",
            LedgerError::StudentNotFound(_) => "STUDENT_NOT_FOUND",
            LedgerError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// True for errors caused by caller input, as opposed to storage failures
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidDate { .. }
                | LedgerError::MissingField(_)
                | LedgerError::InvalidAmount(_)
        )
    }
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
