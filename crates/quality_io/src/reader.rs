//! CSV table loading with per-column type inference.
//!
//! The loader reads a delimited UTF-8 file with a header row and infers one
//! storage type per column over the full column:
//!
//! - all non-null values parse as `i64` and the column has no nulls →
//!   `Integer`
//! - all non-null values parse as `i64` but nulls are present → `Float`
//!   storage with the `null_promoted` flag set
//! - all non-null values parse as `f64` → `Float`
//! - all non-null values parse as a supported date/timestamp format →
//!   `DateTime`
//! - otherwise → `Text`
//!
//! Empty fields are nulls. A column that is entirely null is stored as
//! `Float`. The loader never produces `Categorical` columns; those exist
//! only when a table is constructed programmatically.

use crate::{IoError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use quality_checks::{CellValue, Column, ColumnType, Table};
use std::path::Path;
use tracing::debug;

/// Timestamp formats the loader recognizes, tried in order.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Date-only formats the loader recognizes, parsed as midnight timestamps.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date.and_hms_opt(0, 0, 0).expect("midnight is valid"));
        }
    }
    None
}

/// Classifies a raw column and converts its values.
fn infer_column(name: &str, raw: Vec<Option<String>>) -> Column {
    let non_null: Vec<&str> = raw.iter().flatten().map(String::as_str).collect();
    let has_nulls = non_null.len() < raw.len();

    // Entirely null columns get float storage, as a dataframe engine would
    if non_null.is_empty() {
        let values = raw.iter().map(|_| CellValue::Null).collect();
        return Column::new(name, ColumnType::Float, values);
    }

    if non_null.iter().all(|v| v.parse::<i64>().is_ok()) {
        if has_nulls {
            let values = raw
                .into_iter()
                .map(|v| match v {
                    Some(raw) => CellValue::Float(raw.parse::<i64>().expect("checked above") as f64),
                    None => CellValue::Null,
                })
                .collect();
            return Column::new(name, ColumnType::Float, values).with_null_promoted(true);
        }
        let values = raw
            .into_iter()
            .map(|v| CellValue::Int(v.expect("no nulls").parse().expect("checked above")))
            .collect();
        return Column::new(name, ColumnType::Integer, values);
    }

    if non_null.iter().all(|v| v.parse::<f64>().is_ok()) {
        let values = raw
            .into_iter()
            .map(|v| match v {
                Some(raw) => CellValue::Float(raw.parse().expect("checked above")),
                None => CellValue::Null,
            })
            .collect();
        return Column::new(name, ColumnType::Float, values);
    }

    if non_null.iter().all(|v| parse_datetime(v).is_some()) {
        let values = raw
            .into_iter()
            .map(|v| match v {
                Some(raw) => CellValue::DateTime(parse_datetime(&raw).expect("checked above")),
                None => CellValue::Null,
            })
            .collect();
        return Column::new(name, ColumnType::DateTime, values);
    }

    let values = raw
        .into_iter()
        .map(|v| match v {
            Some(raw) => CellValue::Text(raw),
            None => CellValue::Null,
        })
        .collect();
    Column::new(name, ColumnType::Text, values)
}

/// Loads a CSV file into a `Table`.
///
/// The first row is the header. Empty fields become nulls; each column's
/// storage type is inferred over its full contents (see the module
/// documentation for the inference rules).
///
/// # Errors
///
/// Fails if the file is missing or unreadable, the CSV is malformed or has
/// no header row, or the headers do not form a valid table (duplicate or
/// empty column names).
pub fn load_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| IoError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IoError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IoError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut raw_columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|e| IoError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        for (idx, field) in record.iter().enumerate() {
            if idx >= raw_columns.len() {
                break;
            }
            let cell = if field.is_empty() {
                None
            } else {
                Some(field.to_string())
            };
            raw_columns[idx].push(cell);
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(raw_columns)
        .map(|(name, raw)| infer_column(name, raw))
        .collect();

    let table = Table::new(columns).map_err(|source| IoError::InvalidTable {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.columns().len(),
        "Loaded table"
    );

    Ok(table)
}
