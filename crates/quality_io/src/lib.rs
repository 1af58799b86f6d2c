//! # Data Quality I/O
//!
//! File collaborators for the Data Quality Engine: loading a CSV dataset
//! into an in-memory `Table` (with per-column type inference) and writing a
//! `QualityReport` out as one CSV file per section.
//!
//! ## Example
//!
//! ```no_run
//! use quality_io::{load_table, write_report};
//! use quality_checks::generate_report;
//! use quality_core::CheckConfig;
//! use std::path::Path;
//!
//! let table = load_table(Path::new("data/input/clicks.csv")).unwrap();
//! let config = CheckConfig::default();
//! let report = generate_report(&table, &config).unwrap();
//! write_report(&report, Path::new("data/process/report")).unwrap();
//! ```

mod error;
mod reader;
mod writer;

pub use error::*;
pub use reader::*;
pub use writer::*;
