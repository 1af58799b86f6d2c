//! Quality report model.
//!
//! A report is an ordered set of named sections, each holding a small result
//! table. The section set is fixed: runs over the same table and
//! configuration produce identical reports, section for section.

use std::fmt;

/// The named sections of a quality report, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSection {
    /// Fraction of null entries per column
    NullValueProportion,
    /// Count of rows repeating an earlier identical row
    DuplicateRowsCount,
    /// Bijective-correspondence outcome per configured column pair
    OneToOneRelationship,
    /// Semantic-type conformance per declared column
    DtypeCheck,
    /// Occurrences of values outside each column's permitted set
    UnexpectedValues,
}

impl ReportSection {
    /// All sections in report order.
    pub const ALL: [ReportSection; 5] = [
        ReportSection::NullValueProportion,
        ReportSection::DuplicateRowsCount,
        ReportSection::OneToOneRelationship,
        ReportSection::DtypeCheck,
        ReportSection::UnexpectedValues,
    ];

    /// Returns the section name as it appears in the written report.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSection::NullValueProportion => "null_value_proportion",
            ReportSection::DuplicateRowsCount => "duplicate_rows_count",
            ReportSection::OneToOneRelationship => "one_to_one_relationship",
            ReportSection::DtypeCheck => "dtype_check",
            ReportSection::UnexpectedValues => "unexpected_values",
        }
    }
}

impl fmt::Display for ReportSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cell in a result table.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportValue {
    /// Text cell
    Text(String),
    /// Integer cell
    Int(i64),
    /// Floating point cell
    Float(f64),
    /// Boolean cell
    Bool(bool),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Text(s) => f.write_str(s),
            ReportValue::Int(i) => write!(f, "{}", i),
            ReportValue::Float(v) => write!(f, "{}", v),
            ReportValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for ReportValue {
    fn from(s: String) -> Self {
        ReportValue::Text(s)
    }
}

impl From<&str> for ReportValue {
    fn from(s: &str) -> Self {
        ReportValue::Text(s.to_string())
    }
}

impl From<i64> for ReportValue {
    fn from(i: i64) -> Self {
        ReportValue::Int(i)
    }
}

impl From<f64> for ReportValue {
    fn from(v: f64) -> Self {
        ReportValue::Float(v)
    }
}

impl From<bool> for ReportValue {
    fn from(b: bool) -> Self {
        ReportValue::Bool(b)
    }
}

/// A small rectangular result table: named columns plus rows of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<ReportValue>>,
}

impl ResultTable {
    /// Creates an empty result table with the given column names.
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. The row must have one cell per column.
    pub fn push_row(&mut self, row: Vec<ReportValue>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, in order.
    pub fn rows(&self) -> &[Vec<ReportValue>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The assembled output of a quality-check run.
///
/// Ordered mapping from section to result table, built once by the report
/// orchestrator and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport {
    sections: Vec<(ReportSection, ResultTable)>,
}

impl QualityReport {
    /// Assembles a report from its sections.
    pub fn from_sections(sections: Vec<(ReportSection, ResultTable)>) -> Self {
        Self { sections }
    }

    /// Iterates over the sections in report order.
    pub fn sections(&self) -> impl Iterator<Item = (ReportSection, &ResultTable)> {
        self.sections.iter().map(|(name, table)| (*name, table))
    }

    /// Looks up a section's result table.
    pub fn section(&self, section: ReportSection) -> Option<&ResultTable> {
        self.sections
            .iter()
            .find(|(name, _)| *name == section)
            .map(|(_, table)| table)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the report has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_names() {
        assert_eq!(
            ReportSection::NullValueProportion.to_string(),
            "null_value_proportion"
        );
        assert_eq!(ReportSection::ALL.len(), 5);
        assert_eq!(ReportSection::ALL[4].as_str(), "unexpected_values");
    }

    #[test]
    fn test_result_table_push() {
        let mut table = ResultTable::new(&["column_name", "null_proportion"]);
        assert!(table.is_empty());

        table.push_row(vec!["id".into(), 0.25.into()]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0][0], ReportValue::Text("id".to_string()));
        assert_eq!(table.rows()[0][1], ReportValue::Float(0.25));
    }

    #[test]
    fn test_report_lookup() {
        let mut counts = ResultTable::new(&["duplicate_rows_count"]);
        counts.push_row(vec![3i64.into()]);

        let report =
            QualityReport::from_sections(vec![(ReportSection::DuplicateRowsCount, counts)]);

        let table = report.section(ReportSection::DuplicateRowsCount).unwrap();
        assert_eq!(table.rows()[0][0], ReportValue::Int(3));
        assert!(report.section(ReportSection::DtypeCheck).is_none());
    }

    #[test]
    fn test_report_value_display() {
        assert_eq!(ReportValue::Text("abc".to_string()).to_string(), "abc");
        assert_eq!(ReportValue::Int(-4).to_string(), "-4");
        assert_eq!(ReportValue::Float(0.5).to_string(), "0.5");
        assert_eq!(ReportValue::Bool(false).to_string(), "false");
    }
}
