//! Duplicate row count check.

use crate::{CheckError, Column, Result, Table};
use quality_core::ConfigurationError;
use std::collections::HashSet;

/// Counts rows that repeat an earlier identical row.
///
/// With an empty `granularity`, whole rows are compared (all columns in
/// table order); otherwise only the named columns. The result equals total
/// rows minus distinct rows under the comparison key.
///
/// # Errors
///
/// Returns a `ConfigurationError` if a granularity column does not exist.
pub fn duplicate_rows_count(table: &Table, granularity: &[String]) -> Result<u64> {
    let key_columns: Vec<&Column> = if granularity.is_empty() {
        table.columns().iter().collect()
    } else {
        granularity
            .iter()
            .map(|name| {
                table
                    .column(name)
                    .ok_or_else(|| ConfigurationError::missing_column(name, "granularity"))
            })
            .collect::<std::result::Result<_, _>>()
            .map_err(CheckError::from)?
    };

    // A table with no columns has no rows to compare
    if key_columns.is_empty() {
        return Ok(0);
    }

    let rows = table.row_count();
    let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(rows);
    let mut duplicates = 0u64;

    for idx in 0..rows {
        let key: Vec<String> = key_columns
            .iter()
            .map(|column| column.values()[idx].key_part())
            .collect();
        if !seen.insert(key) {
            duplicates += 1;
        }
    }

    Ok(duplicates)
}
