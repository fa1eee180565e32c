//! Post-processing argument logic
//!
//! Turns parsed [`Args`] into the immutable [`Config`] the rest of the
//! program runs on: validates the mode and resolves the input path.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::authlog::Mode;
use crate::cli::args::Args;
use crate::errors::{AuthlogError, Result};

/// Log read when no source file is given
pub const DEFAULT_INPUT: &str = "/var/log/auth.log";

/// Settings for a single run, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Authentication log to read
    pub input: PathBuf,
    /// Destination file; stdout when `None`
    pub output: Option<PathBuf>,
    /// Append to `output` instead of truncating it
    pub append: bool,
    /// Which attempts to keep
    pub mode: Mode,
    /// Embed ANSI color codes in the results
    pub color: bool,
}

/// Process raw CLI arguments into a [`Config`]
///
/// `default_input` is used when no source file was given on the command line.
pub fn process_args(args: &Args, default_input: &Path) -> Result<Config> {
    let mode = match args.mode.as_deref() {
        None => Mode::All,
        Some(value) => value.parse().unwrap_or_else(|_| {
            eprintln!("Mode {} not valid. Selecting all the entries.", value);
            Mode::All
        }),
    };

    let input = resolve_input(args.source.as_deref(), default_input)?;

    let config = Config {
        input,
        output: args.output.clone(),
        append: args.append,
        mode,
        color: !args.no_color,
    };
    debug!(?config, "Configuration built");
    Ok(config)
}

/// Pick the input log: the explicit path, or `default_input` if it exists
pub fn resolve_input(source: Option<&Path>, default_input: &Path) -> Result<PathBuf> {
    if let Some(path) = source {
        return Ok(path.to_path_buf());
    }

    if default_input.exists() {
        eprintln!("Using default path at {}", default_input.display());
        info!(path = %default_input.display(), "Falling back to default input");
        Ok(default_input.to_path_buf())
    } else {
        Err(AuthlogError::NoInput)
    }
}
