//! Error types for table loading and report writing.

use quality_checks::CheckError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, IoError>;

/// Errors that can occur while loading a table or writing a report.
#[derive(Debug, Error)]
pub enum IoError {
    /// The input file does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Reading the input file failed
    #[error("Failed to read '{}': {source}", path.display())]
    FileRead {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The CSV content could not be parsed
    #[error("Failed to parse CSV '{}': {message}", path.display())]
    CsvParse {
        /// Path being parsed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// The CSV file has no usable header row
    #[error("CSV file '{}' has no header row", path.display())]
    MissingHeader {
        /// Path being parsed
        path: PathBuf,
    },

    /// The parsed columns do not form a valid table
    #[error("Invalid table in '{}': {source}", path.display())]
    InvalidTable {
        /// Path being loaded
        path: PathBuf,
        /// Underlying table error
        #[source]
        source: CheckError,
    },

    /// Writing an output file failed
    #[error("Failed to write '{}': {message}", path.display())]
    WriteFailed {
        /// Path being written
        path: PathBuf,
        /// Writer message
        message: String,
    },
}
