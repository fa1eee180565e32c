//! Output handling (ANSI styling, result sink)

pub mod terminal;
pub mod writer;

pub use terminal::{bold, colorize, colors, error, fg, RESET};
pub use writer::{emit, write_lines};
