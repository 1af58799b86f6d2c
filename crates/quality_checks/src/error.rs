//! Error types for check operations.

use quality_core::ConfigurationError;
use thiserror::Error;

/// Result type for check operations.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Errors that can occur while building a table or running checks.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The configuration does not match the table
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A column's length differs from the rest of the table
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    RaggedColumn {
        /// The offending column name
        column: String,
        /// Row count of the table
        expected: usize,
        /// Row count of the column
        actual: usize,
    },

    /// Two columns share the same name
    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// A column has an empty name
    #[error("Column names must not be empty")]
    EmptyColumnName,
}
