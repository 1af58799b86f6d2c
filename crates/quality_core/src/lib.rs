//! # Data Quality Core
//!
//! Core data structures for the Data Quality Engine: the declarative check
//! configuration (`CheckConfig`), the report model (`QualityReport` and its
//! section tables), and the configuration error type shared by all crates.
//!
//! ## Example
//!
//! ```rust
//! use quality_core::{CheckConfig, SemanticType};
//!
//! let mut config = CheckConfig::default();
//! config.int_vars = vec!["user_id".to_string()];
//! config.date_vars = vec!["signup_date".to_string()];
//!
//! let expected = config.expected_types();
//! assert_eq!(expected[0], ("user_id".to_string(), SemanticType::Integer));
//! assert_eq!(expected[1], ("signup_date".to_string(), SemanticType::Datetime));
//! ```

mod config;
mod error;
mod report;

pub use config::*;
pub use error::*;
pub use report::*;
