//! Appending timestamped lines to log files
//!
//! Handles log directory creation, the writability check, message
//! formatting, and last-line truncation for progress-style overwrites.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, trace};

use crate::error::{LogError, Result};

/// Number of trailing bytes scanned for the last newline during truncation
///
/// A last line longer than this window cannot be removed; see
/// [`truncate_last_line`].
pub const TAIL_WINDOW: u64 = 4096;

/// Options for a single append
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Target filename inside the log directory; `None` uses the dated
    /// default from [`default_filename`]
    pub filename: Option<String>,
    /// Remove the file's last line before appending
    pub overwrite_last_line: bool,
}

impl WriteOptions {
    /// Options targeting a specific filename
    pub fn named(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Self::default()
        }
    }

    /// Enable removal of the last line before the append
    pub fn overwrite_last_line(mut self) -> Self {
        self.overwrite_last_line = true;
        self
    }
}

/// Default log filename for the current local date, e.g. `17.12.2020.log`
pub fn default_filename() -> String {
    format!("{}.log", Local::now().format("%-d.%-m.%Y"))
}

/// Format a message as a timestamped log line, newline-terminated
fn format_line(message: &str) -> String {
    format!("[{}] {}\n", Local::now().format("%-d.%-m.%Y %H:%M:%S"), message)
}

/// Append a timestamped message to a log file under `dir`
///
/// Creates `dir` (and intermediate parents) if absent. With
/// `overwrite_last_line` set and an existing target file, the file's last
/// line is truncated first. The directory writability check precedes the
/// append and is not atomic with it.
///
/// Returns the path of the file written to.
pub fn write(message: &str, dir: &Path, opts: &WriteOptions) -> Result<PathBuf> {
    create_log_dir(dir)?;

    let filename = opts.filename.clone().unwrap_or_else(default_filename);
    let log_path = dir.join(filename);

    if opts.overwrite_last_line && log_path.exists() {
        truncate_last_line(&log_path)?;
    }

    if !dir_writable(dir) {
        return Err(LogError::DirectoryNotWritable(dir.to_path_buf()));
    }

    let line = format_line(message);
    let mut file = OpenOptions::new().create(true).append(true).open(&log_path)?;
    file.write_all(line.as_bytes())?;

    debug!(
        path = %log_path.display(),
        overwrite = opts.overwrite_last_line,
        "appended log line"
    );
    Ok(log_path)
}

/// Remove the last line of a log file
///
/// Scans at most the final [`TAIL_WINDOW`] bytes for the preceding newline
/// under an exclusive advisory lock. If no newline exists within that window
/// the file is left unchanged; arbitrarily long last lines are not removed.
/// The lock covers only the read-and-truncate, not any subsequent append.
pub fn truncate_last_line(path: &Path) -> Result<()> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    lock_exclusive(&file)?;

    let len = file.metadata()?.len();
    let start = len.saturating_sub(TAIL_WINDOW);
    file.seek(SeekFrom::Start(start))?;
    let mut tail = Vec::with_capacity((len - start) as usize);
    file.read_to_end(&mut tail)?;

    // Ignore the newline(s) terminating the last line itself
    let end = tail.iter().rposition(|&b| b != b'\n').map_or(0, |i| i + 1);

    match tail[..end].iter().rposition(|&b| b == b'\n') {
        Some(pos) => {
            file.set_len(start + pos as u64 + 1)?;
            trace!(path = %path.display(), "truncated last line");
        }
        None => {
            trace!(
                path = %path.display(),
                window = TAIL_WINDOW,
                "no newline within tail window, file unchanged"
            );
        }
    }
    // Lock released when the handle drops
    Ok(())
}

/// Create the log directory recursively, mode 0755 on Unix
fn create_log_dir(dir: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir)?;
    Ok(())
}

#[cfg(unix)]
fn dir_writable(dir: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    match CString::new(dir.as_os_str().as_bytes()) {
        Ok(cpath) => unsafe { libc::access(cpath.as_ptr(), libc::W_OK) == 0 },
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn dir_writable(dir: &Path) -> bool {
    fs::metadata(dir)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}

#[cfg(unix)]
fn lock_exclusive(file: &File) -> Result<()> {
    use std::os::unix::io::AsRawFd;

    let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX) };
    if rc != 0 {
        return Err(std::io::Error::last_os_error().into());
    }
    Ok(())
}

#[cfg(not(unix))]
fn lock_exclusive(_file: &File) -> Result<()> {
    Ok(())
}
