//! Display formatting for matched entries

use crate::output::terminal::{bold, colorize, colors};

use super::entry::{LogEntry, State};

/// Render an entry as a single summary line
///
/// Accepted and failed attempts carry a `with:` column; refused connections
/// (and attempts with no user captured) do not. With `color` set, the state
/// and user are wrapped in bold ANSI colors.
pub fn format_entry(entry: &LogEntry<'_>, color: bool) -> String {
    let state = style_state(entry.state, color);

    match (entry.state, entry.user) {
        (State::Accepted | State::Failed, Some(user)) => format!(
            "On: {}  state: {}   with: {}   from: {}",
            entry.timestamp,
            state,
            style_user(user, color),
            entry.source_ip
        ),
        _ => format!(
            "On: {}  state: {}  from: {}",
            entry.timestamp, state, entry.source_ip
        ),
    }
}

fn style_state(state: State, color: bool) -> String {
    if !color {
        return state.as_str().to_string();
    }
    let code = match state {
        State::Accepted => colors::GREEN,
        State::Failed | State::Refused => colors::RED,
    };
    bold(&colorize(state.as_str(), code))
}

fn style_user(user: &str, color: bool) -> String {
    if color {
        bold(&colorize(user, colors::CYAN))
    } else {
        user.to_string()
    }
}
