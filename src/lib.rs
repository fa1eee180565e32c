//! authlog-parser library interface
//!
//! Summarizes login attempts found in a Linux authentication log.
//!
//! # Module Organization
//!
//! - [`cli`] - Argument definitions and the immutable [`cli::Config`]
//! - [`authlog`] - Line matching, classification and formatting
//! - [`output`] - ANSI helpers and the stdout/file sink
//! - [`errors`] - Error types (AuthlogError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`logging`] - Diagnostic tracing setup
//! - [`core`] - Main execution logic

pub mod authlog;
pub mod cli;
pub mod core;
pub mod errors;
pub mod logging;
pub mod output;
pub mod status;
