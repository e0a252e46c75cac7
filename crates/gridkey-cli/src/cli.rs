//! CLI argument definitions for `gridkey`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use gridkey_model::Axis;
use gridkey_reports::DEFAULT_GRAB_SHEET;

#[derive(Parser)]
#[command(
    name = "gridkey",
    version,
    about = "Extract keyed records from spreadsheet-style grids",
    long_about = "Extract keyed records from spreadsheet-style grids.\n\n\
                  Header rows and columns are declared in a TOML or JSON spec file;\n\
                  every data cell is emitted with the full set of header keys."
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

    /// Include cell values in trace logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract every keyed data cell of a grid.
    Extract(ExtractArgs),

    /// Show every position of one axis with its keys and completeness.
    Layout(LayoutArgs),

    /// Read an attendance sheet (employees across, dates down).
    Attendance(AttendanceArgs),

    /// Summarize a daily sales workbook folder.
    Sales(SalesArgs),
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Grid file (.csv or .json).
    #[arg(value_name = "GRID")]
    pub grid: PathBuf,

    /// Header spec file (.toml or .json).
    #[arg(long = "spec", value_name = "FILE")]
    pub spec: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct LayoutArgs {
    /// Grid file (.csv or .json).
    #[arg(value_name = "GRID")]
    pub grid: PathBuf,

    /// Header spec file (.toml or .json).
    #[arg(long = "spec", value_name = "FILE")]
    pub spec: PathBuf,

    /// Axis to resolve.
    #[arg(long = "axis", value_enum)]
    pub axis: AxisArg,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct AttendanceArgs {
    /// Attendance grid file (.csv or .json).
    #[arg(value_name = "GRID")]
    pub grid: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct SalesArgs {
    /// Folder holding one grid file per sheet.
    #[arg(value_name = "WORKBOOK_DIR")]
    pub workbook: PathBuf,

    /// Name of the delivery-platform sheet.
    #[arg(long = "grab-sheet", value_name = "NAME", default_value = DEFAULT_GRAB_SHEET)]
    pub grab_sheet: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct OutputArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write output to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Table,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    Col,
    Row,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Col => Axis::Column,
            AxisArg::Row => Axis::Row,
        }
    }
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
