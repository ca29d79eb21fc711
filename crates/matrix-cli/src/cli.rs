//! CLI argument definitions for market-matrix.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use matrix_model::{SortDirection, SortKey, ViewMode};

#[derive(Parser)]
#[command(
    name = "market-matrix",
    version,
    about = "Browse a directory of market participants grouped by category",
    long_about = "Browse a directory of market participants grouped by category.\n\n\
                  Reads a saved provider response (grouped, flat, enveloped, or raw\n\
                  tabular JSON) and prints the grid or table view."
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

    /// Log output format.
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
    /// Show the directory in grid or table mode.
    View(ViewArgs),

    /// List categories in display order with record counts.
    Categories(SourceArgs),

    /// List the states offered by the state filter.
    States,
}

#[derive(Args)]
pub struct SourceArgs {
    /// Saved provider response (JSON).
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Category order, layout, and column mapping (TOML).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Presentation mode.
    #[arg(long = "mode", value_enum, default_value = "grid")]
    pub mode: ModeArg,

    /// Show only these categories (repeatable; default: all).
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Narrow to organizations operating in these states (repeatable).
    #[arg(long = "state", value_name = "NAME")]
    pub states: Vec<String>,

    /// Leave out nationally operating organizations when filtering by state.
    #[arg(long = "no-national")]
    pub no_national: bool,

    /// Case-insensitive search over name, contact, states, and categories.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Table sort column.
    #[arg(long = "sort", value_enum)]
    pub sort: Option<SortArg>,

    /// Sort descending.
    #[arg(long = "descending", conflicts_with = "ascending")]
    pub descending: bool,

    /// Sort ascending.
    #[arg(long = "ascending")]
    pub ascending: bool,

    /// Expand (grid) or select (table) the record with this id.
    #[arg(long = "focus", value_name = "ID")]
    pub focus: Option<String>,

    /// Print the derived view as JSON instead of text.
    #[arg(long = "json")]
    pub json: bool,
}

impl ViewArgs {
    pub fn direction(&self) -> Option<SortDirection> {
        if self.descending {
            Some(SortDirection::Descending)
        } else if self.ascending {
            Some(SortDirection::Ascending)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Grid,
    Table,
}

impl From<ModeArg> for ViewMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Grid => ViewMode::Grid,
            ModeArg::Table => ViewMode::Table,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Name,
    Category,
    Verified,
    States,
    Contact,
    Website,
}

impl From<SortArg> for SortKey {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Name => SortKey::Name,
            SortArg::Category => SortKey::Category,
            SortArg::Verified => SortKey::Verified,
            SortArg::States => SortKey::States,
            SortArg::Contact => SortKey::ContactInfo,
            SortArg::Website => SortKey::WebsiteUrl,
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
