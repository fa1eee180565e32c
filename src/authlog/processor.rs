//! Read → match → filter → format

use std::fs::File;
use std::io::{BufRead, BufReader};

use tracing::{debug, info};

use crate::cli::Config;
use crate::errors::{AuthlogError, Result};

use super::entry::Mode;
use super::format::format_entry;
use super::matcher::parse_line;

/// Counters for one pass over a log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines read
    pub lines: usize,
    /// Lines that matched the login-attempt pattern
    pub matched: usize,
    /// Matches that survived the mode filter
    pub kept: usize,
}

/// Format every matching line from `reader` that `mode` keeps, in file order
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the run.
pub fn collect_lines<R: BufRead>(mut reader: R, mode: Mode, color: bool) -> Result<(Vec<String>, Summary)> {
    let mut out = Vec::new();
    let mut summary = Summary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        summary.lines += 1;

        let line = String::from_utf8_lossy(&buf);
        let Some(entry) = parse_line(line.trim_end_matches(['\n', '\r'])) else {
            continue;
        };
        summary.matched += 1;

        if !mode.keeps(entry.state) {
            continue;
        }
        summary.kept += 1;
        out.push(format_entry(&entry, color));
    }

    Ok((out, summary))
}

/// Open the configured input log and collect its formatted entries
pub fn process_file(config: &Config) -> Result<Vec<String>> {
    let file = File::open(&config.input).map_err(|source| AuthlogError::Open {
        path: config.input.clone(),
        source,
    })?;
    debug!(path = %config.input.display(), mode = ?config.mode, "Reading log");

    let (lines, summary) = collect_lines(BufReader::new(file), config.mode, config.color)?;
    info!(
        lines = summary.lines,
        matched = summary.matched,
        kept = summary.kept,
        "Log processed"
    );
    Ok(lines)
}
