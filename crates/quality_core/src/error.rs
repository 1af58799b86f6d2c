//! Configuration error types.
//!
//! A quality-check run is all-or-nothing: a configuration that references a
//! column missing from the table, or omits a required section, aborts the
//! run before any report section is produced.

use thiserror::Error;

/// Result type for configuration validation.
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Fatal configuration errors.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A configured column does not exist in the table
    #[error("Column '{column}' referenced by '{field}' does not exist in the table")]
    MissingColumn {
        /// The offending column name
        column: String,
        /// The configuration field that references it
        field: String,
    },

    /// A required configuration section is absent
    #[error("Required configuration section '{0}' is missing")]
    MissingSection(String),
}

impl ConfigurationError {
    /// Creates a missing-column error.
    pub fn missing_column(column: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            field: field.into(),
        }
    }

    /// Creates a missing-section error.
    pub fn missing_section(section: impl Into<String>) -> Self {
        Self::MissingSection(section.into())
    }
}
