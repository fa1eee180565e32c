//! Authentication log processing
//!
//! Lines flow through [`matcher`] (regex capture into a [`LogEntry`]),
//! get filtered by [`Mode`], and are rendered by [`format`].

pub mod entry;
pub mod format;
pub mod matcher;
pub mod processor;

pub use entry::{LogEntry, Mode, State};
pub use format::format_entry;
pub use matcher::parse_line;
pub use processor::{collect_lines, process_file, Summary};
