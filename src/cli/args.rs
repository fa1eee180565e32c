//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for authlog-parser.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Utility to parse authentication linux logs to have a better view of accesses.
#[derive(Parser, Debug, Clone)]
#[command(name = "authlog-parser", version, about, long_about = None)]
#[command(override_usage = "authlog-parser [OPTIONS] [SOURCEFILE]")]
#[command(after_help = "NOTE: if no file is given /var/log/auth.log is used.")]
#[command(disable_version_flag = true)] // -v instead of -V
pub struct Args {
    /// Authentication log to read
    #[arg(value_name = "SOURCEFILE")]
    pub source: Option<PathBuf>,

    /// Name of the output file
    #[arg(short = 'o', long = "output", value_name = "FILENAME")]
    pub output: Option<PathBuf>,

    /// Appends the results to the file
    #[arg(short = 'a', long = "append", action = ArgAction::SetTrue)]
    pub append: bool,

    /// Show all (default), only accepted or only failed requests [all|accepted|failed]
    ///
    /// An unrecognized value falls back to `all` with a warning.
    #[arg(
        short = 'm',
        long = "mode",
        value_name = "MODE",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub mode: Option<String>,

    /// Do not embed ANSI color codes in the results
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Format for diagnostic logs on stderr: text (default) or json
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    /// Show version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

/// Log format for diagnostics
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}
