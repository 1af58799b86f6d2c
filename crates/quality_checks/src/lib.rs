//! # Data Quality Checks
//!
//! The check engine of the Data Quality Engine. This crate provides the
//! in-memory table model and the battery of structural checks run against
//! it:
//!
//! - Null proportion per column
//! - Duplicate row count (whole row or keyed by a granularity column set)
//! - One-to-one relationship between column pairs
//! - Semantic-type conformance
//! - Allowed-value membership ("unexpected values")
//!
//! Every check is a pure, synchronous function over an immutable `Table`;
//! the `generate_report` orchestrator runs them according to a
//! `CheckConfig` and assembles the `QualityReport`.
//!
//! ## Example
//!
//! ```rust
//! use quality_checks::{Column, ColumnType, Table, generate_report};
//! use quality_core::{CheckConfig, ReportSection};
//! use std::collections::BTreeMap;
//!
//! let table = Table::new(vec![Column::new(
//!     "status",
//!     ColumnType::Text,
//!     vec!["ok".into(), "ok".into(), "weird".into()],
//! )])
//! .unwrap();
//!
//! let config = CheckConfig {
//!     value_set: Some(BTreeMap::from([(
//!         "status".to_string(),
//!         vec!["ok".to_string()],
//!     )])),
//!     ..CheckConfig::default()
//! };
//!
//! let report = generate_report(&table, &config).unwrap();
//! assert_eq!(report.len(), ReportSection::ALL.len());
//! ```

mod domain;
mod duplicates;
mod dtypes;
mod engine;
mod error;
mod nulls;
mod relationship;
mod table;

pub use domain::*;
pub use duplicates::*;
pub use dtypes::*;
pub use engine::*;
pub use error::*;
pub use nulls::*;
pub use relationship::*;
pub use table::*;
