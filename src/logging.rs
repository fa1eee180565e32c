//! Diagnostic logging
//!
//! Results go to stdout (or the output file); diagnostics always go to stderr
//! so the two never interleave.

use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogFormat;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "warn";

/// Initialize the global tracing subscriber
///
/// Uses `RUST_LOG` for level filtering when present. Calling this twice is
/// harmless: the second installation attempt is ignored.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };
}
