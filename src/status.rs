//! Exit status codes for the CLI
//!
//! authlog-parser follows standard Unix exit code conventions:
//! - 0: Success, including `--help` and `--version`
//! - 1: Any error (unknown option, missing input file, I/O failure)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Successful execution
    Success = 0,
    /// Any error
    Error = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    /// Create an exit status from a raw exit code
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}
