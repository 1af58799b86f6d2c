//! Unexpected value check.

use crate::{CheckError, Result, Table};
use quality_core::ConfigurationError;
use std::collections::{HashMap, HashSet};

/// Counts occurrences of values outside a column's permitted set.
///
/// Values are compared by their canonical text rendering. Nulls are never
/// counted as unexpected (missingness is the null-proportion check's
/// concern). The result is sorted by descending count, ties broken by first
/// appearance in the column.
///
/// # Errors
///
/// Returns a `ConfigurationError` if the column does not exist.
pub fn unexpected_values(
    table: &Table,
    column_name: &str,
    allowed: &[String],
) -> Result<Vec<(String, u64)>> {
    let column = table
        .column(column_name)
        .ok_or_else(|| ConfigurationError::missing_column(column_name, "value_set"))
        .map_err(CheckError::from)?;

    let allowed: HashSet<&str> = allowed.iter().map(String::as_str).collect();

    let mut counts: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for value in column.values() {
        if value.is_null() {
            continue;
        }
        let rendered = value.render();
        if allowed.contains(rendered.as_str()) {
            continue;
        }
        match index.get(&rendered) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(rendered.clone(), counts.len());
                counts.push((rendered, 1));
            }
        }
    }

    // Stable sort keeps first-encountered order within equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellValue, Column, ColumnType};
    use pretty_assertions::assert_eq;

    fn status_table(values: &[&str]) -> Table {
        Table::new(vec![Column::new(
            "status",
            ColumnType::Text,
            values.iter().map(|v| (*v).into()).collect(),
        )])
        .unwrap()
    }

    #[test]
    fn test_single_unexpected_value() {
        let table = status_table(&["ok", "ok", "bad", "weird"]);
        let allowed = vec!["ok".to_string(), "bad".to_string()];

        let result = unexpected_values(&table, "status", &allowed).unwrap();
        assert_eq!(result, vec![("weird".to_string(), 1)]);
    }

    #[test]
    fn test_sorted_by_descending_count() {
        let table = status_table(&["a", "b", "b", "c", "b", "c"]);
        let allowed: Vec<String> = Vec::new();

        let result = unexpected_values(&table, "status", &allowed).unwrap();
        assert_eq!(
            result,
            vec![
                ("b".to_string(), 3),
                ("c".to_string(), 2),
                ("a".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        let table = status_table(&["z", "a", "z", "a"]);
        let allowed: Vec<String> = Vec::new();

        let result = unexpected_values(&table, "status", &allowed).unwrap();
        assert_eq!(result, vec![("z".to_string(), 2), ("a".to_string(), 2)]);
    }

    #[test]
    fn test_nulls_not_counted() {
        let table = Table::new(vec![Column::new(
            "status",
            ColumnType::Text,
            vec!["ok".into(), CellValue::Null, "weird".into()],
        )])
        .unwrap();
        let allowed = vec!["ok".to_string()];

        let result = unexpected_values(&table, "status", &allowed).unwrap();
        assert_eq!(result, vec![("weird".to_string(), 1)]);
    }

    #[test]
    fn test_numeric_column_compared_by_rendering() {
        let table = Table::new(vec![Column::new(
            "code",
            ColumnType::Integer,
            vec![1i64.into(), 2i64.into(), 9i64.into()],
        )])
        .unwrap();
        let allowed = vec!["1".to_string(), "2".to_string()];

        let result = unexpected_values(&table, "code", &allowed).unwrap();
        assert_eq!(result, vec![("9".to_string(), 1)]);
    }

    #[test]
    fn test_missing_column() {
        let table = status_table(&["ok"]);
        let err = unexpected_values(&table, "region", &[]).unwrap_err();
        assert!(err.to_string().contains("region"));
        assert!(err.to_string().contains("value_set"));
    }
}
