//! CLI argument definitions for the event wrangler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use wrangler_model::DEFAULT_FULL_MATCH_MINUTES;

#[derive(Parser)]
#[command(
    name = "event-wrangler",
    version,
    about = "Normalize a flat match event log into matches, teams, players and stats",
    long_about = "Normalize a flat match event log into four related tables.\n\n\
                  Reads one CSV row per (match, player, team) participation and writes\n\
                  teams.jsonl, matches.jsonl, stats.jsonl and players.jsonl."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize an event CSV and write the output tables.
    Run(RunArgs),

    /// List the output tables and their column order.
    Tables,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the event log CSV.
    #[arg(value_name = "EVENTS_CSV")]
    pub events: PathBuf,

    /// Output directory for generated files (default: <EVENTS_CSV dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Minutes in a full match, the denominator of frac_minutes_played.
    #[arg(long = "full-match-minutes", value_name = "N", default_value_t = DEFAULT_FULL_MATCH_MINUTES)]
    pub full_match_minutes: u32,

    /// Skip the functional-dependency check.
    #[arg(long = "no-dependency-check")]
    pub no_dependency_check: bool,

    /// Build and summarize the tables without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
