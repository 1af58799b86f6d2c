use colored::Colorize;
use quality_core::{QualityReport, ReportSection, ReportValue};
use serde_json::json;

pub fn print_report_summary(report: &QualityReport, format: &str) {
    match format {
        "json" => print_json_summary(report),
        _ => print_text_summary(report),
    }
}

fn print_text_summary(report: &QualityReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  DATA QUALITY REPORT".bold());
    println!("{}", "═".repeat(60));

    if let Some(nulls) = report.section(ReportSection::NullValueProportion) {
        let affected = nulls
            .rows()
            .iter()
            .filter(|row| !matches!(row[1], ReportValue::Float(p) if p == 0.0))
            .count();
        print_line(
            "null_value_proportion",
            &format!("{} of {} columns contain nulls", affected, nulls.len()),
            affected == 0,
        );
    }

    if let Some(duplicates) = report.section(ReportSection::DuplicateRowsCount) {
        let count = match duplicates.rows().first().map(|row| &row[0]) {
            Some(ReportValue::Int(count)) => *count,
            _ => 0,
        };
        print_line(
            "duplicate_rows_count",
            &format!("{} duplicate row(s)", count),
            count == 0,
        );
    }

    if let Some(pairs) = report.section(ReportSection::OneToOneRelationship) {
        let failing = pairs
            .rows()
            .iter()
            .filter(|row| row[2] == ReportValue::Bool(false))
            .count();
        print_line(
            "one_to_one_relationship",
            &format!("{} pair(s) checked, {} failing", pairs.len(), failing),
            failing == 0,
        );
    }

    if let Some(dtypes) = report.section(ReportSection::DtypeCheck) {
        let failing = dtypes
            .rows()
            .iter()
            .filter(|row| row[1] == ReportValue::Bool(false))
            .count();
        print_line(
            "dtype_check",
            &format!("{} column(s) checked, {} failing", dtypes.len(), failing),
            failing == 0,
        );
    }

    if let Some(unexpected) = report.section(ReportSection::UnexpectedValues) {
        let total: i64 = unexpected
            .rows()
            .iter()
            .filter_map(|row| match row[2] {
                ReportValue::Int(count) => Some(count),
                _ => None,
            })
            .sum();
        print_line(
            "unexpected_values",
            &format!("{} unexpected occurrence(s)", total),
            total == 0,
        );
    }

    println!("{}", "═".repeat(60));
}

fn print_line(section: &str, summary: &str, clean: bool) {
    let marker = if clean {
        "✓".green().bold()
    } else {
        "✗".yellow().bold()
    };
    println!("  {} {:24} {}", marker, section, summary);
}

fn print_json_summary(report: &QualityReport) {
    let sections: serde_json::Map<String, serde_json::Value> = report
        .sections()
        .map(|(section, table)| {
            let rows: Vec<serde_json::Value> = table
                .rows()
                .iter()
                .map(|row| {
                    let cells: serde_json::Map<String, serde_json::Value> = table
                        .columns()
                        .iter()
                        .zip(row)
                        .map(|(column, cell)| (column.clone(), value_to_json(cell)))
                        .collect();
                    serde_json::Value::Object(cells)
                })
                .collect();
            (section.to_string(), json!(rows))
        })
        .collect();

    let output = serde_json::Value::Object(sections);
    println!(
        "{}",
        serde_json::to_string_pretty(&output).expect("report sections serialize to JSON")
    );
}

fn value_to_json(value: &ReportValue) -> serde_json::Value {
    match value {
        ReportValue::Text(s) => json!(s),
        ReportValue::Int(i) => json!(i),
        ReportValue::Float(v) => json!(v),
        ReportValue::Bool(b) => json!(b),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
