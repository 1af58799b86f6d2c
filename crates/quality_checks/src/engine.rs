//! Report orchestration.
//!
//! This module runs the individual checks according to the configuration and
//! assembles their outputs into a `QualityReport`. The run is all-or-nothing:
//! configuration problems abort before any section is produced.

use crate::{
    CheckError, Result, Table, check_dtypes, check_one_to_one, duplicate_rows_count,
    null_value_proportion, unexpected_values,
};
use quality_core::{
    CheckConfig, ConfigurationError, QualityReport, ReportSection, ReportValue, ResultTable,
};
use tracing::debug;

/// Generates a quality report for a table under the given configuration.
///
/// The five report sections are always present, in fixed order; sections
/// whose checks are unconfigured (no one-to-one pairs, no type lists) are
/// empty. `value_set` is mandatory. Running twice on the same inputs yields
/// identical reports.
///
/// # Errors
///
/// Returns a `ConfigurationError` before producing any section if
/// `value_set` is absent or if any configured column does not exist in the
/// table. There is no partial-report recovery.
///
/// # Example
///
/// ```rust
/// use quality_checks::{Column, ColumnType, Table, generate_report};
/// use quality_core::{CheckConfig, ReportSection};
/// use std::collections::BTreeMap;
///
/// let table = Table::new(vec![Column::new(
///     "status",
///     ColumnType::Text,
///     vec!["ok".into(), "weird".into()],
/// )])
/// .unwrap();
///
/// let config = CheckConfig {
///     value_set: Some(BTreeMap::from([(
///         "status".to_string(),
///         vec!["ok".to_string()],
///     )])),
///     ..CheckConfig::default()
/// };
///
/// let report = generate_report(&table, &config).unwrap();
/// assert_eq!(report.section(ReportSection::UnexpectedValues).unwrap().len(), 1);
/// ```
pub fn generate_report(table: &Table, config: &CheckConfig) -> Result<QualityReport> {
    let value_set = config
        .value_set
        .as_ref()
        .ok_or_else(|| CheckError::from(ConfigurationError::missing_section("value_set")))?;

    // Fail fast: every configured column must exist before any check runs
    for (column, field) in config.referenced_columns() {
        if !table.has_column(column) {
            return Err(ConfigurationError::missing_column(column, field).into());
        }
    }

    debug!(
        rows = table.row_count(),
        columns = table.columns().len(),
        "Generating quality report"
    );

    let mut sections = Vec::with_capacity(ReportSection::ALL.len());

    sections.push((
        ReportSection::NullValueProportion,
        null_value_proportion(table),
    ));

    let mut duplicates = ResultTable::new(&["duplicate_rows_count"]);
    let count = duplicate_rows_count(table, &config.granularity)?;
    duplicates.push_row(vec![ReportValue::Int(count as i64)]);
    sections.push((ReportSection::DuplicateRowsCount, duplicates));

    // One row per configured pair, keyed by the pair
    let mut one_to_one = ResultTable::new(&["column_a", "column_b", "is_one_to_one"]);
    for (left, right) in &config.one_to_one_vars {
        let bijective = check_one_to_one(table, left, right)?;
        debug!(left, right, bijective, "One-to-one pair evaluated");
        one_to_one.push_row(vec![
            left.as_str().into(),
            right.as_str().into(),
            bijective.into(),
        ]);
    }
    sections.push((ReportSection::OneToOneRelationship, one_to_one));

    sections.push((
        ReportSection::DtypeCheck,
        check_dtypes(table, &config.expected_types())?,
    ));

    // Concatenate per-column results, tagging each row with its source column
    let mut unexpected = ResultTable::new(&["column_name", "value", "count"]);
    for (column, allowed) in value_set {
        for (value, count) in unexpected_values(table, column, allowed)? {
            unexpected.push_row(vec![
                column.as_str().into(),
                value.into(),
                ReportValue::Int(count as i64),
            ]);
        }
    }
    sections.push((ReportSection::UnexpectedValues, unexpected));

    Ok(QualityReport::from_sections(sections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellValue, Column, ColumnType};
    use std::collections::BTreeMap;

    fn sample_table() -> Table {
        Table::new(vec![
            Column::new(
                "id",
                ColumnType::Integer,
                vec![1i64.into(), 1i64.into(), 2i64.into()],
            ),
            Column::new(
                "status",
                ColumnType::Text,
                vec!["ok".into(), "ok".into(), "weird".into()],
            ),
        ])
        .unwrap()
    }

    fn minimal_config() -> CheckConfig {
        CheckConfig {
            value_set: Some(BTreeMap::from([(
                "status".to_string(),
                vec!["ok".to_string(), "bad".to_string()],
            )])),
            ..CheckConfig::default()
        }
    }

    #[test]
    fn test_all_sections_present_in_order() {
        let report = generate_report(&sample_table(), &minimal_config()).unwrap();

        let names: Vec<_> = report.sections().map(|(section, _)| section).collect();
        assert_eq!(names, ReportSection::ALL.to_vec());
    }

    #[test]
    fn test_unconfigured_sections_are_empty() {
        let report = generate_report(&sample_table(), &minimal_config()).unwrap();

        assert!(
            report
                .section(ReportSection::OneToOneRelationship)
                .unwrap()
                .is_empty()
        );
        assert!(report.section(ReportSection::DtypeCheck).unwrap().is_empty());
        // Null proportion and duplicate count always run
        assert_eq!(
            report
                .section(ReportSection::NullValueProportion)
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            report
                .section(ReportSection::DuplicateRowsCount)
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_missing_value_set_is_fatal() {
        let config = CheckConfig::default();
        let err = generate_report(&sample_table(), &config).unwrap_err();
        assert!(err.to_string().contains("value_set"));
    }

    #[test]
    fn test_missing_column_aborts_before_report() {
        let config = CheckConfig {
            granularity: vec!["region".to_string()],
            ..minimal_config()
        };

        let err = generate_report(&sample_table(), &config).unwrap_err();
        assert!(err.to_string().contains("region"));
        assert!(err.to_string().contains("granularity"));
    }

    #[test]
    fn test_every_one_to_one_pair_reported() {
        let table = Table::new(vec![
            Column::new("a", ColumnType::Text, vec!["x".into(), "y".into()]),
            Column::new("b", ColumnType::Text, vec!["1".into(), "2".into()]),
            Column::new("c", ColumnType::Text, vec!["same".into(), "same".into()]),
        ])
        .unwrap();

        let config = CheckConfig {
            one_to_one_vars: vec![
                ("a".to_string(), "b".to_string()),
                ("a".to_string(), "c".to_string()),
            ],
            value_set: Some(BTreeMap::new()),
            ..CheckConfig::default()
        };

        let report = generate_report(&table, &config).unwrap();
        let section = report.section(ReportSection::OneToOneRelationship).unwrap();

        assert_eq!(section.len(), 2);
        assert_eq!(section.rows()[0][2], ReportValue::Bool(true));
        assert_eq!(section.rows()[1][2], ReportValue::Bool(false));
    }

    #[test]
    fn test_idempotent() {
        let table = Table::new(vec![
            Column::new(
                "age",
                ColumnType::Float,
                vec![30.0.into(), CellValue::Null, 41.0.into()],
            )
            .with_null_promoted(true),
            Column::new(
                "status",
                ColumnType::Text,
                vec!["ok".into(), "bad".into(), "weird".into()],
            ),
        ])
        .unwrap();

        let config = CheckConfig {
            int_vars: vec!["age".to_string()],
            value_set: Some(BTreeMap::from([(
                "status".to_string(),
                vec!["ok".to_string(), "bad".to_string()],
            )])),
            ..CheckConfig::default()
        };

        let first = generate_report(&table, &config).unwrap();
        let second = generate_report(&table, &config).unwrap();
        assert_eq!(first, second);
    }
}
