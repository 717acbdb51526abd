//! CLI argument definitions for the risk map shell.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hai-map",
    version,
    about = "HAI surveillance - per-bed risk map",
    long_about = "Aggregate healthcare-associated infection observations into a\n\
                  per-bed risk percentage, joined onto floor-plan coordinates and\n\
                  ordered by the hospital floor taxonomy."
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
    /// Compute the joined risk table and print it, optionally for one floor.
    Map(MapArgs),

    /// List the ordered floor selector derived from a coordinate table.
    Floors(FloorsArgs),

    /// List the sector floor-plan images in a directory.
    Sectors(SectorsArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the event table (one row per patient-bed observation).
    #[arg(value_name = "EVENTS_CSV")]
    pub events: PathBuf,

    /// Path to the bed coordinate table.
    #[arg(value_name = "COORDS_CSV")]
    pub coordinates: PathBuf,

    /// Restrict the output to one floor.
    #[arg(long = "floor", value_name = "NAME")]
    pub floor: Option<String>,

    /// JSON file with the floor enumeration (default: built-in ward list).
    #[arg(long = "floors-file", value_name = "PATH")]
    pub floors_file: Option<PathBuf>,

    /// Write the joined table as CSV.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Drop beds that have coordinates but no observations, instead of
    /// plotting them at zero risk.
    #[arg(long = "exclude-unobserved")]
    pub exclude_unobserved: bool,
}

#[derive(Parser)]
pub struct FloorsArgs {
    /// Path to the bed coordinate table.
    #[arg(value_name = "COORDS_CSV")]
    pub coordinates: PathBuf,

    /// JSON file with the floor enumeration (default: built-in ward list).
    #[arg(long = "floors-file", value_name = "PATH")]
    pub floors_file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SectorsArgs {
    /// Directory holding one PNG floor plan per sector.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
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
