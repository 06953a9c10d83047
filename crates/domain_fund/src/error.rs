//! Fund domain errors

use core_kernel::{FundId, PortError};
use thiserror::Error;

/// Errors that can occur in the fund domain
#[derive(Debug, Error)]
pub enum FundError {
    #[error("Fund not found: {0}")]
    FundNotFound(FundId),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] PortError),
}

impl FundError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        FundError::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// The name of the offending field, for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            FundError::MissingField(field) | FundError::InvalidField { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Errors that abort a whole CSV import
///
/// Everything below the file level (bad rows, unparsable values, storage
/// failures for a single row) is reported as an import warning instead.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV file is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Could not read CSV header row: {0}")]
    Header(#[source] csv::Error),
}
