//! CLI definition using clap

use clap::Parser;
use convoy_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convoy")]
#[command(version)]
#[command(about = "Vehicle record ETL: spreadsheet to SQLite to JSON/XML reports")]
#[command(long_about = None)]
pub struct Cli {
    /// Input file: .xlsx, .csv, [CHECKED].csv, or .s3db
    pub input: PathBuf,

    /// Enable fitness scoring and the score-split JSON/XML exports
    #[arg(long)]
    pub scoring: bool,

    /// Worksheet name to convert (spreadsheet input only)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format for the run summary (table, json)
    #[arg(long, short = 'f', default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
