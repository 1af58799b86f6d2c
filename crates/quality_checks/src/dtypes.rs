//! Semantic-type conformance check.

use crate::{CheckError, ColumnType, Result, Table};
use quality_core::{ConfigurationError, ResultTable, SemanticType};

/// Returns true if the storage classification satisfies the expectation.
///
/// `integer` requires strictly integral, null-free storage: a column whose
/// integral values were promoted to float by nulls does not match. The
/// promotion itself is surfaced separately via the `null_promoted` flag.
fn storage_matches(dtype: ColumnType, expected: SemanticType) -> bool {
    matches!(
        (dtype, expected),
        (ColumnType::Integer, SemanticType::Integer)
            | (ColumnType::Float, SemanticType::Float)
            | (ColumnType::Text, SemanticType::Text)
            | (ColumnType::DateTime, SemanticType::Datetime)
            | (ColumnType::Categorical, SemanticType::Categorical)
    )
}

/// The configuration field a semantic-type expectation came from, for error
/// messages.
fn config_field(expected: SemanticType) -> &'static str {
    match expected {
        SemanticType::Integer => "int_vars",
        SemanticType::Float => "float_vars",
        SemanticType::Text => "str_vars",
        SemanticType::Datetime => "date_vars",
        SemanticType::Categorical => "categorical_vars",
    }
}

/// Compares declared column types against the table's storage types.
///
/// Returns a result table with columns
/// `(column_name, is_expected_type, null_promoted)`, one row per declared
/// column in declaration order. Columns not mentioned in any type list do
/// not appear. Non-conformance is a reported boolean, never an error.
///
/// # Errors
///
/// Returns a `ConfigurationError` if a declared column does not exist.
pub fn check_dtypes(table: &Table, expected: &[(String, SemanticType)]) -> Result<ResultTable> {
    let mut result = ResultTable::new(&["column_name", "is_expected_type", "null_promoted"]);

    for (name, semantic) in expected {
        let column = table
            .column(name)
            .ok_or_else(|| ConfigurationError::missing_column(name, config_field(*semantic)))
            .map_err(CheckError::from)?;

        result.push_row(vec![
            name.as_str().into(),
            storage_matches(column.dtype(), *semantic).into(),
            column.null_promoted().into(),
        ]);
    }

    Ok(result)
}
