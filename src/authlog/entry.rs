//! Login attempt types

use std::fmt;
use std::str::FromStr;

use crate::errors::AuthlogError;

/// Outcome of a login attempt, as written in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Accepted,
    Failed,
    Refused,
}

impl State {
    /// The literal word that appears in the log line
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Accepted => "Accepted",
            State::Failed => "Failed",
            State::Refused => "refused",
        }
    }

    /// Parse the exact (case-sensitive) log word
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "Accepted" => Some(State::Accepted),
            "Failed" => Some(State::Failed),
            "refused" => Some(State::Refused),
            _ => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Every matched attempt
    #[default]
    All,
    /// Only accepted logins
    Accepted,
    /// Failed and refused attempts
    Failed,
}

impl Mode {
    /// Whether an attempt in `state` survives this filter
    #[inline]
    pub fn keeps(&self, state: State) -> bool {
        match self {
            Mode::All => true,
            Mode::Accepted => state == State::Accepted,
            Mode::Failed => matches!(state, State::Failed | State::Refused),
        }
    }
}

impl FromStr for Mode {
    type Err = AuthlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Mode::All),
            "accepted" => Ok(Mode::Accepted),
            "failed" => Ok(Mode::Failed),
            other => Err(AuthlogError::Argument(format!("unknown mode '{}'", other))),
        }
    }
}

/// One login attempt, borrowed from the line it was matched in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry<'a> {
    /// Syslog timestamp, e.g. `Sep  8 18:05:58`
    pub timestamp: &'a str,
    pub state: State,
    /// Last word before ` from`, when present
    pub user: Option<&'a str>,
    pub source_ip: &'a str,
}
