//! Result sink: stdout or a file

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};

use tracing::debug;

use crate::cli::Config;
use crate::errors::{AuthlogError, Result};

/// Write each line followed by `\n`
pub fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Emit the collected lines where the config says
///
/// Writes to stdout when no output file is set. Otherwise the file is created
/// if needed and either truncated or appended to, then closed on return. ANSI
/// codes are written to files as-is unless color was turned off.
pub fn emit(lines: &[String], config: &Config) -> Result<()> {
    let Some(path) = &config.output else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        return match write_lines(&mut handle, lines) {
            // Reader went away (e.g. piped into `head`)
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other.map_err(AuthlogError::Io),
        };
    };

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(path)
        .map_err(|source| AuthlogError::Open {
            path: path.clone(),
            source,
        })?;

    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, lines).map_err(|source| AuthlogError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), count = lines.len(), append = config.append, "Results written");
    Ok(())
}
