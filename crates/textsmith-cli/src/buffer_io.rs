use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{CliError, CliResult};

/// Where the buffer comes from and where the result goes.
#[derive(Args, Debug, Clone, Default)]
pub struct BufferArgs {
    /// Buffer content given inline.
    #[arg(long, global = true, conflicts_with = "input")]
    pub text: Option<String>,
    /// Read the buffer from a file (stdin is used when neither flag is set).
    #[arg(long, short, global = true)]
    pub input: Option<PathBuf>,
    /// Write the result to a file instead of stdout.
    #[arg(long, short, global = true, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,
    /// Write the result back to the --input file.
    #[arg(long, global = true, default_value_t = false)]
    pub in_place: bool,
}

impl BufferArgs {
    /// Reads the buffer. One trailing newline is dropped from piped stdin.
    pub fn read(&self) -> CliResult<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            return Ok(std::fs::read_to_string(path)?);
        }

        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Ok(String::new());
        }
        let mut buffer = String::new();
        stdin.lock().read_to_string(&mut buffer)?;
        Ok(strip_trailing_newline(buffer))
    }

    /// Writes the transformed buffer to its destination.
    pub fn write(&self, buffer: &str) -> CliResult<()> {
        if self.in_place {
            let path = self.input.as_deref().ok_or_else(|| {
                CliError::InvalidConfig("--in-place requires --input".to_string())
            })?;
            return write_bytes_atomic(path, buffer.as_bytes());
        }
        if let Some(path) = &self.output {
            return write_bytes_atomic(path, buffer.as_bytes());
        }

        let mut stdout = io::stdout().lock();
        stdout.write_all(buffer.as_bytes())?;
        if stdout.is_terminal() {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
        Ok(())
    }
}

fn strip_trailing_newline(mut buffer: String) -> String {
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    buffer
}

/// Replaces `path` with `data` through a synced temporary file, so readers see
/// either the old buffer or the new one.
pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    std::fs::rename(&tmp_path, path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            sync_dir(parent)?;
        }
    }

    Ok(())
}

fn temp_path(path: &Path) -> CliResult<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CliError::InvalidConfig("invalid path for atomic write".to_string()))?;
    let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

#[cfg(unix)]
fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}
