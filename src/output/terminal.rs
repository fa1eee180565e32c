//! ANSI styling helpers
//!
//! Basic 8-color SGR codes only, so the output reads the same in any terminal
//! and in files viewed with `less -R` or `cat`.

pub mod colors {
    pub const RED: u8 = 31;
    pub const GREEN: u8 = 32;
    pub const CYAN: u8 = 36;
}

/// ANSI escape code constants
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
/// Turns bold off without touching the color
pub const NORMAL_INTENSITY: &str = "\x1b[22m";

/// Generate foreground color escape code
#[inline]
pub fn fg(color: u8) -> String {
    format!("\x1b[{}m", color)
}

/// Colorize text with a foreground color
#[inline]
pub fn colorize(text: &str, color: u8) -> String {
    format!("{}{}{}", fg(color), text, RESET)
}

/// Wrap text in bold
#[inline]
pub fn bold(text: &str) -> String {
    format!("{}{}{}", BOLD, text, NORMAL_INTENSITY)
}

/// Error message (bold red)
#[inline]
pub fn error(text: &str) -> String {
    bold(&colorize(text, colors::RED))
}
