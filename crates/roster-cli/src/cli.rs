//! CLI argument definitions for the `roster` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::EntityKind;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster Studio - bulk import and export of school records",
    long_about = "Import Students, Classes, Teachers and Grading Systems from XLSX workbooks,\n\
                  export records back to XLSX and generate import templates.\n\n\
                  Every row-level problem is reported; valid rows are imported regardless."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Allow raw cell values (personal data) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: ./roster.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a workbook and report validation results.
    Import(ImportArgs),

    /// Export records from a JSON file to a workbook.
    Export(ExportArgs),

    /// Write the import template for an entity type.
    Template(TemplateArgs),

    /// List entity types and their columns.
    Schemas,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Entity type: student, class, teacher or grading-system.
    #[arg(value_name = "ENTITY", value_parser = parse_entity)]
    pub entity: EntityKind,

    /// Workbook to import (.xlsx).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write imported records as JSON.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Assemble grade ranges into a grading system with this name.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Accept unrecognized gender values instead of reporting them.
    #[arg(long = "lenient-gender")]
    pub lenient_gender: bool,

    /// Print every error instead of the first few.
    #[arg(long = "all-errors")]
    pub all_errors: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Entity type of the records.
    #[arg(value_name = "ENTITY", value_parser = parse_entity)]
    pub entity: EntityKind,

    /// JSON file written by `roster import --json`.
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Directory for the exported workbook.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Entity type of the template.
    #[arg(value_name = "ENTITY", value_parser = parse_entity)]
    pub entity: EntityKind,

    /// Directory for the template workbook.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
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

fn parse_entity(value: &str) -> Result<EntityKind, String> {
    value.parse().map_err(|err: roster_model::ConfigurationError| err.to_string())
}
