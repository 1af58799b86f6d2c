//! Null proportion check.

use crate::Table;
use quality_core::ResultTable;

/// Computes the fraction of null entries per column.
///
/// Returns a result table with columns `(column_name, null_proportion)`,
/// one row per table column in table order. Proportions are in `[0, 1]`.
/// A zero-row table yields 0.0 for every column by convention.
pub fn null_value_proportion(table: &Table) -> ResultTable {
    let mut result = ResultTable::new(&["column_name", "null_proportion"]);
    let rows = table.row_count();

    for column in table.columns() {
        let proportion = if rows == 0 {
            0.0
        } else {
            column.null_count() as f64 / rows as f64
        };
        result.push_row(vec![column.name().into(), proportion.into()]);
    }

    result
}
