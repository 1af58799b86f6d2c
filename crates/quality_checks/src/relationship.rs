//! One-to-one relationship check.

use crate::{CheckError, Result, Table};
use quality_core::ConfigurationError;
use std::collections::HashSet;

/// Determines whether two columns are in one-to-one correspondence on the
/// observed data.
///
/// True iff the number of distinct values in each column equals the number
/// of distinct `(left, right)` pairs. Symmetric in its arguments.
///
/// # Errors
///
/// Returns a `ConfigurationError` if either column does not exist.
pub fn check_one_to_one(table: &Table, left: &str, right: &str) -> Result<bool> {
    let a = table
        .column(left)
        .ok_or_else(|| ConfigurationError::missing_column(left, "one_to_one_vars"))
        .map_err(CheckError::from)?;
    let b = table
        .column(right)
        .ok_or_else(|| ConfigurationError::missing_column(right, "one_to_one_vars"))
        .map_err(CheckError::from)?;

    let mut distinct_left = HashSet::new();
    let mut distinct_right = HashSet::new();
    let mut distinct_pairs = HashSet::new();

    for idx in 0..table.row_count() {
        let key_left = a.values()[idx].key_part();
        let key_right = b.values()[idx].key_part();
        distinct_left.insert(key_left.clone());
        distinct_right.insert(key_right.clone());
        distinct_pairs.insert((key_left, key_right));
    }

    Ok(distinct_left.len() == distinct_right.len() && distinct_left.len() == distinct_pairs.len())
}
