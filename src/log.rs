//! Handle bound to a single log directory
//!
//! Lets callers resolve the log directory once at startup and pass the
//! handle around instead of threading paths through every call site.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::maintenance;
use crate::search::{self, Match};
use crate::writer::{self, WriteOptions};

/// A log directory handle
///
/// Construct one per log directory and call its methods from anywhere;
/// the handle holds no open files and no shared mutable state.
#[derive(Debug, Clone)]
pub struct Log {
    dir: PathBuf,
}

impl Log {
    /// Bind a handle to a log directory
    ///
    /// The directory does not need to exist yet; it is created on the
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The bound log directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path a filename resolves to inside the log directory
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// Append a timestamped message to the dated default log file
    pub fn write(&self, message: &str) -> Result<PathBuf> {
        writer::write(message, &self.dir, &WriteOptions::default())
    }

    /// Append a timestamped message with explicit options
    pub fn write_with(&self, message: &str, opts: &WriteOptions) -> Result<PathBuf> {
        writer::write(message, &self.dir, opts)
    }

    /// Find the first occurrence of `needle` in a log file by filename
    pub fn find_first(&self, filename: &str, needle: &str) -> Result<Option<Match>> {
        search::find_first(&self.path_for(filename), needle)
    }

    /// Find every occurrence of `needle` in a log file by filename
    pub fn find_all(&self, filename: &str, needle: &str) -> Result<Vec<String>> {
        search::find_all(&self.path_for(filename), needle)
    }

    /// Empty a log file by filename
    pub fn clear(&self, filename: &str) -> Result<()> {
        maintenance::clear(&self.path_for(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_handle_write_find_clear_cycle() {
        let temp_dir = TempDir::new().unwrap();
        let log = Log::new(temp_dir.path());

        log.write_with("deploy started", &WriteOptions::named("app.log"))
            .unwrap();
        log.write_with("deploy finished", &WriteOptions::named("app.log"))
            .unwrap();

        let hit = log.find_first("app.log", "deploy").unwrap().unwrap();
        assert_eq!(hit.text, "deploy started");
        assert_eq!(log.find_all("app.log", "deploy").unwrap().len(), 2);

        log.clear("app.log").unwrap();
        assert_eq!(
            fs::read_to_string(log.path_for("app.log")).unwrap(),
            ""
        );
    }

    #[test]
    fn test_handle_overwrite_progress_updates() {
        let temp_dir = TempDir::new().unwrap();
        let log = Log::new(temp_dir.path());
        let opts = WriteOptions::named("progress.log");

        log.write_with("progress: 10%", &opts).unwrap();
        let overwrite = opts.clone().overwrite_last_line();
        log.write_with("progress: 50%", &overwrite).unwrap();
        log.write_with("progress: 100%", &overwrite).unwrap();

        let contents = fs::read_to_string(log.path_for("progress.log")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("progress: 100%"));
    }

    #[test]
    fn test_handle_default_write_uses_dated_file() {
        let temp_dir = TempDir::new().unwrap();
        let log = Log::new(temp_dir.path());

        let path = log.write("hello").unwrap();
        assert!(path.starts_with(log.dir()));
        assert!(path.to_string_lossy().ends_with(".log"));
    }
}
