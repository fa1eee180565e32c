//! Line matcher
//!
//! A single pattern pulls four groups out of an auth.log line:
//!
//! ```text
//! Sep  8 18:05:58 giuse sshd[8494]: Accepted password for giuse from 127.0.0.1 port 49776 ssh2
//! ^^^^^^^^^^^^^^^                   ^^^^^^^^              ^^^^^      ^^^^^^^^^
//! timestamp                         state                 user       source ip
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use super::entry::{LogEntry, State};

/// Timestamp, state word after `": "`, optional last word before ` from`, IPv4
static LOGIN_ATTEMPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(\w{3} ? \d{1,2} \d{2}:\d{2}:\d{2})",
        r" .+: (Failed|Accepted|refused)",
        r".*?(?: ([\w-]+))?",
        r" from ([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})",
    ))
    .unwrap()
});

/// Match one log line, returning `None` unless every required group is present
pub fn parse_line(line: &str) -> Option<LogEntry<'_>> {
    let caps = LOGIN_ATTEMPT.captures(line)?;

    let timestamp = caps.get(1)?.as_str();
    let state = State::from_word(caps.get(2)?.as_str())?;
    let user = caps.get(3).map(|m| m.as_str());
    let source_ip = caps.get(4)?.as_str();

    Some(LogEntry {
        timestamp,
        state,
        user,
        source_ip,
    })
}
