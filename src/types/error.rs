//! Error types for the coffee plant tracker
//!
//! This module defines all error types that can surface from the record store,
//! the repositories and the CLI. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **I/O Errors**: permission denied, disk full, path is a directory, etc.
//! - **Parse Errors**: a record line that cannot be decoded or encoded
//! - **Validation Errors**: missing or unusable attributes, duplicate batch IDs
//! - **Lookup Errors**: a batch that does not exist
//!
//! A missing data file is never an error: reads against it return an empty sequence.

use thiserror::Error;

/// Main error type for the coffee plant tracker
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlantError {
    /// I/O error occurred while reading or writing a record file
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A record could not be decoded from or encoded to its line format
    ///
    /// Reads contain these per line (the line is skipped); they only
    /// propagate from the write path.
    #[error("Record parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A required attribute was absent or blank
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the absent attribute
        field: String,
    },

    /// An attribute holds a value the line format cannot store
    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidField {
        /// Name of the offending attribute
        field: String,
        /// The rejected value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A batch with this ID is already in the inventory
    #[error("Batch ID already exists: {batch_id}")]
    DuplicateBatch {
        /// The duplicated batch ID
        batch_id: String,
    },

    /// No batch with this ID is in the inventory
    #[error("Batch not found: {batch_id}")]
    BatchNotFound {
        /// The batch ID that was looked up
        batch_id: String,
    },
}

impl From<std::io::Error> for PlantError {
    fn from(error: std::io::Error) -> Self {
        PlantError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for PlantError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        PlantError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl PlantError {
    /// Create a MissingField error
    pub fn missing_field(field: &str) -> Self {
        PlantError::MissingField {
            field: field.to_string(),
        }
    }

    /// Create an InvalidField error
    pub fn invalid_field(field: &str, value: &str, reason: &str) -> Self {
        PlantError::InvalidField {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a DuplicateBatch error
    pub fn duplicate_batch(batch_id: &str) -> Self {
        PlantError::DuplicateBatch {
            batch_id: batch_id.to_string(),
        }
    }

    /// Create a BatchNotFound error
    pub fn batch_not_found(batch_id: &str) -> Self {
        PlantError::BatchNotFound {
            batch_id: batch_id.to_string(),
        }
    }

    /// Whether this error was caused by the caller's input rather than storage
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlantError::MissingField { .. }
                | PlantError::InvalidField { .. }
                | PlantError::DuplicateBatch { .. }
        )
    }
}
