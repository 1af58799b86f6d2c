use anyhow::{Context, Result, anyhow};
use quality_checks::generate_report;
use quality_io::{load_table, write_report};
use quality_parser::parse_file;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::output;

pub fn execute(config_path: &str, data: Option<&str>, output_dir: &str, format: &str) -> Result<()> {
    info!("Loading configuration: {}", config_path);

    let config_path = Path::new(config_path);
    let config = parse_file(config_path)
        .with_context(|| format!("Failed to parse configuration file: {}", config_path.display()))?;

    let data_path = resolve_data_path(config_path, data, config.input_file_name.as_deref())?;
    info!("Loading dataset: {}", data_path.display());

    let table = load_table(&data_path)
        .with_context(|| format!("Failed to load dataset: {}", data_path.display()))?;

    output::print_info(&format!(
        "Dataset loaded: {} columns, {} rows",
        table.columns().len(),
        table.row_count()
    ));

    let report = generate_report(&table, &config).context("Report generation failed")?;

    let output_dir = Path::new(output_dir);
    write_report(&report, output_dir)
        .with_context(|| format!("Failed to write report to {}", output_dir.display()))?;

    output::print_success(&format!("Report written to {}", output_dir.display()));
    output::print_report_summary(&report, format);

    Ok(())
}

/// Picks the dataset path: an explicit `--data` argument wins; otherwise the
/// configuration's `input_file_name`, resolved relative to the configuration
/// file's directory.
fn resolve_data_path(
    config_path: &Path,
    data: Option<&str>,
    input_file_name: Option<&str>,
) -> Result<PathBuf> {
    if let Some(data) = data {
        return Ok(PathBuf::from(data));
    }

    let name = input_file_name.ok_or_else(|| {
        anyhow!("No input dataset: pass --data or set input_file_name in the configuration")
    })?;

    let base = config_path.parent().unwrap_or_else(|| Path::new("."));
    Ok(base.join(name))
}
