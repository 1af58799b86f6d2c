//! In-memory table representation.
//!
//! This module provides the columnar table the checks run against: an
//! ordered sequence of named columns, each holding values of a single
//! storage type. Checks never mutate a table.

use crate::{CheckError, Result};
use chrono::NaiveDateTime;

/// A single cell in a table column.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Null/missing value
    Null,
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
    /// Date or timestamp value
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Int(_) => "int64",
            CellValue::Float(_) => "float64",
            CellValue::Text(_) => "text",
            CellValue::DateTime(_) => "datetime",
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Attempts to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical text rendering of this value.
    ///
    /// Nulls render as the empty string. This is the form values are
    /// compared against permitted-value sets and shown in reports.
    pub fn render(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::DateTime(ts) => ts.to_string(),
        }
    }

    /// Type-tagged key used for equality in distinct/duplicate scans.
    ///
    /// The tag keeps values of different storage types distinct even when
    /// their renderings coincide (e.g. the text "1" and the integer 1).
    pub(crate) fn key_part(&self) -> String {
        match self {
            CellValue::Null => "n:".to_string(),
            CellValue::Int(i) => format!("i:{}", i),
            CellValue::Float(v) => format!("f:{}", v),
            CellValue::Text(s) => format!("t:{}", s),
            CellValue::DateTime(ts) => format!("d:{}", ts),
        }
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(ts: NaiveDateTime) -> Self {
        CellValue::DateTime(ts)
    }
}

/// Storage classification of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Strictly integral, null-free storage
    Integer,
    /// Floating point storage (including null-promoted integers)
    Float,
    /// Text storage
    Text,
    /// Date/timestamp storage
    DateTime,
    /// Categorical storage over a fixed value set
    Categorical,
}

impl ColumnType {
    /// Returns the lowercase name of this storage type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Text => "text",
            ColumnType::DateTime => "datetime",
            ColumnType::Categorical => "categorical",
        }
    }
}

/// A named, typed column of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    dtype: ColumnType,
    null_promoted: bool,
    values: Vec<CellValue>,
}

impl Column {
    /// Creates a new column.
    pub fn new(name: impl Into<String>, dtype: ColumnType, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            dtype,
            null_promoted: false,
            values,
        }
    }

    /// Marks this column as an integer column stored as float because it
    /// contains nulls.
    pub fn with_null_promoted(mut self, null_promoted: bool) -> Self {
        self.null_promoted = null_promoted;
        self
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Storage classification.
    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    /// Whether integral values were promoted to float storage by nulls.
    pub fn null_promoted(&self) -> bool {
        self.null_promoted
    }

    /// The column's values, in row order.
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// Number of values in the column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of null values in the column.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }
}

/// A rectangular in-memory dataset: ordered named columns of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Creates a table from columns, validating that names are non-empty
    /// and unique and that all columns have the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let expected = columns.first().map_or(0, Column::len);

        let mut seen = std::collections::HashSet::new();
        for column in &columns {
            if column.name().is_empty() {
                return Err(CheckError::EmptyColumnName);
            }
            if !seen.insert(column.name().to_string()) {
                return Err(CheckError::DuplicateColumn(column.name().to_string()));
            }
            if column.len() != expected {
                return Err(CheckError::RaggedColumn {
                    column: column.name().to_string(),
                    expected,
                    actual: column.len(),
                });
            }
        }

        Ok(Self { columns })
    }

    /// Creates a table with no columns and no rows.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// The columns, in table order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Returns true if a column with the given name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Column names, in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}
