//! CLI argument definitions for the survey study browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey",
    version,
    about = "Browse survey study payloads by segment",
    long_about = "Browse studies exported from the studies API.\n\n\
                  Lists and filters studies, shows the segment tabs of a view mode,\n\
                  and renders each question as a table, bar chart data, or heatmap."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// List studies, optionally filtered.
    Studies(StudiesArgs),

    /// List the distinct study keywords.
    Tags(SourceArgs),

    /// List the segment tabs of a study for a view mode.
    Segments(SegmentsArgs),

    /// Render the questions of one segment tab.
    Show(ShowArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Payload file, or a directory of payload files.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,
}

#[derive(Args)]
pub struct StudiesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Case-insensitive title search.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Keyword that must be present (repeatable).
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Keep studies still running on or after this day (YYYY-MM-DD).
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// Keep studies started on or before this day (YYYY-MM-DD).
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct SegmentsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Study `_id`.
    #[arg(value_name = "STUDY_ID")]
    pub study_id: String,

    /// View mode whose segments are listed.
    #[arg(long = "view", value_enum, default_value = "bottom-up")]
    pub view: ViewModeArg,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Study `_id`.
    #[arg(value_name = "STUDY_ID")]
    pub study_id: String,

    /// View mode to open the study in.
    #[arg(long = "view", value_enum, default_value = "bottom-up")]
    pub view: ViewModeArg,

    /// How each question is rendered.
    #[arg(long = "display", value_enum, default_value = "table")]
    pub display: DisplayModeArg,

    /// Segment tab name (default: Overall, else the first tab).
    #[arg(long = "segment", value_name = "NAME")]
    pub segment: Option<String>,

    /// Heatmap palette as JSON (`{"low": "#00ff00", ...}`).
    #[arg(long = "palette", value_name = "PATH")]
    pub palette: Option<PathBuf>,

    /// Print JSON projections instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI view mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ViewModeArg {
    #[value(name = "bottom-up", alias = "b")]
    BottomUp,
    #[value(name = "top-down", alias = "t")]
    TopDown,
    #[value(name = "response-time", alias = "r")]
    ResponseTime,
}

/// CLI display mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DisplayModeArg {
    Table,
    Chart,
    Heatmap,
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
