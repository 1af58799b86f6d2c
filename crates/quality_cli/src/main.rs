mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dq")]
#[command(version, about = "Data Quality Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the quality checks against a dataset and write the report
    Report {
        /// Path to the check configuration file (YAML or TOML)
        #[arg(short, long)]
        config: String,

        /// Path to the input CSV file (defaults to the configuration's
        /// input_file_name, resolved relative to the configuration file)
        #[arg(short, long)]
        data: Option<String>,

        /// Directory the report sections are written to
        #[arg(short, long, default_value = "report")]
        output: String,

        /// Summary output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the shape and inferred column types of a dataset
    Describe {
        /// Path to the input CSV file
        data: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Report {
            config,
            data,
            output,
            format,
        } => commands::report::execute(&config, data.as_deref(), &output, &format),

        Commands::Describe { data } => commands::describe::execute(&data),
    }
}
