//! Common test utilities for authlog-parser integration tests
//!
//! This module provides shared test infrastructure including:
//! - CLI invocation helpers
//! - Auth log fixture management
//! - ANSI stripping for assertions

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// ANSI color escape sequence prefix
pub const COLOR: &str = "\x1b[";

/// A representative auth.log excerpt: 2 accepted, 2 failed, 1 refused, 3 noise
pub const AUTH_LOG: &str = "\
Sep  8 18:05:58 giuse sshd[8494]: Accepted password for giuse from 127.0.0.1 port 49776 ssh2
Sep  8 18:05:58 giuse sshd[8494]: pam_unix(sshd:session): session opened for user giuse by (uid=0)
Sep  8 18:06:01 giuse sshd[8500]: Failed password for baduser from 10.0.0.5 port 1234 ssh2
Sep  8 18:06:04 giuse sshd[8502]: Failed password for invalid user admin from 10.0.0.7 port 4411 ssh2
Sep  8 18:06:09 giuse sshd[8503]: refused connect from 192.0.2.44 (192.0.2.44)
Sep  8 18:07:00 giuse CRON[8600]: pam_unix(cron:session): session closed for user root
Sep 10 08:00:12 giuse sshd[9001]: Accepted publickey for deploy from 198.51.100.23 port 50022 ssh2: RSA SHA256:abc
Sep 10 08:00:13 giuse sudo:   deploy : TTY=pts/0 ; PWD=/home/deploy ; USER=root ; COMMAND=/bin/true
";

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Raw exit code
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    /// Non-empty stdout lines with colors stripped
    pub fn plain_lines(&self) -> Vec<String> {
        self.stdout
            .lines()
            .filter(|l| !l.is_empty())
            .map(strip_colors)
            .collect()
    }
}

impl std::ops::Deref for CliResponse {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.stdout
    }
}

/// A temporary directory holding an input log
pub struct Fixture {
    pub dir: TempDir,
    pub log: PathBuf,
}

impl Fixture {
    /// Create a fixture whose log contains `content`
    pub fn new(content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let log = dir.path().join("auth.log");
        std::fs::write(&log, content).expect("Failed to write fixture log");
        Self { dir, log }
    }

    /// Fixture with the standard [`AUTH_LOG`] content
    pub fn standard() -> Self {
        Self::new(AUTH_LOG)
    }

    /// Path for an output file inside the fixture directory
    pub fn out(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn log_arg(&self) -> &str {
        path_arg(&self.log)
    }
}

pub fn path_arg(path: &Path) -> &str {
    path.to_str().expect("Non UTF-8 temp path")
}

/// Run the CLI with the given arguments
///
/// # Arguments
/// * `args` - Command line arguments (excluding the program name)
pub fn authlog(args: &[&str]) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_authlog-parser"));
    cmd.args(args);
    cmd.env_remove("RUST_LOG");
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().expect("Failed to execute command");
    parse_output(output)
}

fn parse_output(output: Output) -> CliResponse {
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(1),
    }
}

/// Strip ANSI color codes from a string
pub fn strip_colors(s: &str) -> String {
    let re = regex::Regex::new(r"\x1b\[[\d;]*m").unwrap();
    re.replace_all(s, "").to_string()
}
