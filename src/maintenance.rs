//! Log file maintenance
//!
//! Clearing log files and the shared existence check.

use std::fs::OpenOptions;
use std::path::Path;

use tracing::debug;

use crate::error::{LogError, Result};

/// Empty a log file without deleting it
///
/// Fails with `FileNotFound` if the file is absent; otherwise the file is
/// truncated to zero length. Clearing an already-empty file succeeds.
pub fn clear(path: &Path) -> Result<()> {
    check_log_file_exists(path)?;
    OpenOptions::new().write(true).truncate(true).open(path)?;
    debug!(path = %path.display(), "cleared log file");
    Ok(())
}

/// Map a missing log file to `FileNotFound` carrying the path
pub(crate) fn check_log_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LogError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}
