use std::io::{self, IsTerminal};
use std::path::Path;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use crate::authlog::process_file;
use crate::cli::{process_args, Args, DEFAULT_INPUT};
use crate::errors::AuthlogError;
use crate::logging;
use crate::output::{self, emit};
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Parses arguments, sets up logging, and runs the read/filter/emit pipeline
/// against the default input location.
pub fn run(args: Vec<String>) -> ExitStatus {
    run_with_default_input(args, Path::new(DEFAULT_INPUT))
}

/// Same as [`run`], reading `default_input` when no source file is given.
pub fn run_with_default_input(args: Vec<String>, default_input: &Path) -> ExitStatus {
    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => return handle_parse_error(e),
    };

    logging::init_logging(parsed.log_format.unwrap_or_default());
    debug!(?parsed, "Arguments parsed");

    match program(&parsed, default_input) {
        Ok(status) => status,
        Err(e) => handle_error(e),
    }
}

pub fn program(args: &Args, default_input: &Path) -> Result<ExitStatus, AuthlogError> {
    let config = process_args(args, default_input)?;
    let lines = process_file(&config)?;
    emit(&lines, &config)?;
    Ok(ExitStatus::Success)
}

fn handle_parse_error(error: clap::Error) -> ExitStatus {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            error.print().ok();
            ExitStatus::Success
        }
        _ => {
            let banner = "unknown option!";
            if io::stderr().is_terminal() {
                eprintln!("{}", output::error(banner));
            } else {
                eprintln!("{}", banner);
            }
            // clap's rendering includes the offending argument and usage
            error.print().ok();
            ExitStatus::Error
        }
    }
}

fn handle_error(error: AuthlogError) -> ExitStatus {
    eprintln!("Error: {}", error);

    // All errors return the same exit code (1) following Unix conventions
    ExitStatus::Error
}
