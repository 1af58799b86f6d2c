//! Check configuration types.
//!
//! This module contains the declarative configuration bundle that drives a
//! quality-check run: which checks to perform and their parameters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Semantic type a column can be expected to hold.
///
/// These are the five classifications a check configuration may declare for
/// a column. They are compared against the table's storage classification by
/// the type-conformance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// Whole numbers with no fractional component and no nulls
    Integer,
    /// Floating point numbers
    Float,
    /// Free-form text
    Text,
    /// Dates and timestamps
    Datetime,
    /// Categorical values drawn from a fixed set
    Categorical,
}

impl SemanticType {
    /// Returns the lowercase name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Integer => "integer",
            SemanticType::Float => "float",
            SemanticType::Text => "text",
            SemanticType::Datetime => "datetime",
            SemanticType::Categorical => "categorical",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative configuration for a quality-check run.
///
/// Mirrors the keys of the configuration file. Empty lists mean the
/// corresponding check is skipped; `value_set` is the one section the report
/// orchestrator treats as mandatory.
///
/// # Example
///
/// ```rust
/// use quality_core::CheckConfig;
/// use std::collections::BTreeMap;
///
/// let config = CheckConfig {
///     granularity: vec!["order_id".to_string()],
///     value_set: Some(BTreeMap::from([(
///         "status".to_string(),
///         vec!["ok".to_string(), "failed".to_string()],
///     )])),
///     ..CheckConfig::default()
/// };
/// assert_eq!(config.granularity.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Name of the input data file (used by the CLI to locate the dataset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_file_name: Option<String>,

    /// Columns defining row identity for duplicate detection.
    /// Empty means whole-row duplicates.
    #[serde(default)]
    pub granularity: Vec<String>,

    /// Column pairs expected to be in one-to-one correspondence
    #[serde(default)]
    pub one_to_one_vars: Vec<(String, String)>,

    /// Columns expected to hold integers
    #[serde(default)]
    pub int_vars: Vec<String>,

    /// Columns expected to hold floating point numbers
    #[serde(default)]
    pub float_vars: Vec<String>,

    /// Columns expected to hold text
    #[serde(default)]
    pub str_vars: Vec<String>,

    /// Columns expected to hold dates or timestamps
    #[serde(default)]
    pub date_vars: Vec<String>,

    /// Columns expected to hold categorical values
    #[serde(default)]
    pub categorical_vars: Vec<String>,

    /// Permitted values per column; values outside the set are "unexpected".
    /// Absent (`None`) is a configuration error at report time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_set: Option<BTreeMap<String, Vec<String>>>,
}

impl CheckConfig {
    /// Flattens the per-type column lists into `(column, expected type)` pairs.
    ///
    /// Pairs appear in declaration order. A column named in more than one
    /// list keeps its first position but takes the last declared type
    /// (int → float → str → date → categorical order).
    pub fn expected_types(&self) -> Vec<(String, SemanticType)> {
        let lists = [
            (&self.int_vars, SemanticType::Integer),
            (&self.float_vars, SemanticType::Float),
            (&self.str_vars, SemanticType::Text),
            (&self.date_vars, SemanticType::Datetime),
            (&self.categorical_vars, SemanticType::Categorical),
        ];

        let mut expected: Vec<(String, SemanticType)> = Vec::new();
        for (columns, semantic) in lists {
            for column in columns {
                match expected.iter_mut().find(|(name, _)| name == column) {
                    Some((_, existing)) => *existing = semantic,
                    None => expected.push((column.clone(), semantic)),
                }
            }
        }
        expected
    }

    /// Every column name referenced by this configuration, paired with the
    /// configuration field that references it.
    ///
    /// Used to validate the configuration against a table before any check
    /// runs: each referenced column must exist.
    pub fn referenced_columns(&self) -> Vec<(&str, &'static str)> {
        let mut refs: Vec<(&str, &'static str)> = Vec::new();

        for column in &self.granularity {
            refs.push((column, "granularity"));
        }
        for (left, right) in &self.one_to_one_vars {
            refs.push((left, "one_to_one_vars"));
            refs.push((right, "one_to_one_vars"));
        }
        for column in &self.int_vars {
            refs.push((column, "int_vars"));
        }
        for column in &self.float_vars {
            refs.push((column, "float_vars"));
        }
        for column in &self.str_vars {
            refs.push((column, "str_vars"));
        }
        for column in &self.date_vars {
            refs.push((column, "date_vars"));
        }
        for column in &self.categorical_vars {
            refs.push((column, "categorical_vars"));
        }
        if let Some(value_set) = &self.value_set {
            for column in value_set.keys() {
                refs.push((column, "value_set"));
            }
        }

        refs
    }
}
