use anyhow::{Context, Result};
use colored::Colorize;
use quality_io::load_table;
use std::path::Path;

pub fn execute(data: &str) -> Result<()> {
    let path = Path::new(data);
    let table = load_table(path)
        .with_context(|| format!("Failed to load dataset: {}", path.display()))?;

    println!(
        "\n{} {} columns × {} rows\n",
        "Table:".bold(),
        table.columns().len(),
        table.row_count()
    );

    let name_width = table
        .column_names()
        .map(str::len)
        .max()
        .unwrap_or(0)
        .max("column".len());

    for column in table.columns() {
        let promoted = if column.null_promoted() {
            ", null-promoted".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:name_width$}  {:11} ({} nulls{})",
            column.name(),
            column.dtype().as_str(),
            column.null_count(),
            promoted,
        );
    }

    Ok(())
}
