//! CLI argument definitions for the record normalizer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dossier",
    version,
    about = "Normalize extracted record tables into typed columns",
    long_about = "Normalize tables of free-text person records.\n\n\
                  Each row's name cell is decomposed into name, patronymic, address,\n\
                  phone, judicial-history and other columns; dates are rewritten\n\
                  as DD.MM.YYYY."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw cell values in trace logs.
    ///
    /// Cells hold personal data; without this flag they are logged as
    /// [REDACTED].
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a CSV table or a folder of CSV tables.
    Run(RunArgs),

    /// Print the effective column layout as JSON.
    Layout(LayoutArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// A CSV file, or a folder whose CSV files form one workbook.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for normalized tables (default: <INPUT folder>/normalized).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON column layout in source (pre-deletion) coordinates.
    #[arg(long = "layout", value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Never drop the first row as a header.
    #[arg(long = "keep-header")]
    pub keep_header: bool,

    /// Year used as the pivot for two-digit years (default: current year).
    #[arg(long = "reference-year", value_name = "YYYY")]
    pub reference_year: Option<i32>,

    /// Input is already normalized output: use the settled layout and keep
    /// the first row.
    #[arg(long = "settled")]
    pub settled: bool,

    /// Print statistics as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct LayoutArgs {
    /// Layout file to validate and print instead of the default.
    #[arg(long = "layout", value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Print the post-deletion layout used for re-runs.
    #[arg(long = "settled")]
    pub settled: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
