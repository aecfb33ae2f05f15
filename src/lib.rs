//! Daylog - dated log files with timestamped appends
//!
//! A small utility for writing `[17.12.2020 18:00:00] message` lines to log
//! files named after the current date, searching them with a regex needle,
//! clearing them, and overwriting the last line for progress-style updates.
//!
//! ```no_run
//! use daylog::{Log, WriteOptions};
//!
//! # fn main() -> daylog::Result<()> {
//! let log = Log::new("/var/app/logs");
//! log.write("update record: 123")?;
//!
//! // Progress updates that replace the previous line
//! let progress = WriteOptions::named("import.log").overwrite_last_line();
//! log.write_with("imported 50 of 200", &progress)?;
//!
//! if let Some(hit) = log.find_first("import.log", "imported")? {
//!     println!("{}", hit.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod log;
pub mod maintenance;
pub mod search;
pub mod writer;

pub use error::{LogError, Result};
pub use log::Log;
pub use maintenance::clear;
pub use search::{find_all, find_first, Match};
pub use writer::{default_filename, truncate_last_line, write, WriteOptions, TAIL_WINDOW};
