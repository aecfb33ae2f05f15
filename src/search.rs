//! Searching log file contents
//!
//! Matches a caller-supplied pattern fragment against whole log lines. The
//! needle is used verbatim, so regex metacharacters in it are active.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::Result;
use crate::maintenance::check_log_file_exists;

/// A single search hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The full matched text: the needle match plus the rest of its line
    pub text: String,
    /// Texts of any capture groups inside the needle, in group order
    pub captures: Vec<Option<String>>,
}

/// Find the first occurrence of `needle` in a log file
///
/// The match extends from the needle to the end of its line. Returns `None`
/// when nothing matches and `FileNotFound` when the file is absent.
pub fn find_first(path: &Path, needle: &str) -> Result<Option<Match>> {
    check_log_file_exists(path)?;
    let contents = fs::read_to_string(path)?;
    let pattern = line_pattern(needle)?;

    Ok(pattern.captures(&contents).map(|caps| Match {
        text: caps[0].to_string(),
        captures: caps
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()))
            .collect(),
    }))
}

/// Find every occurrence of `needle` in a log file
///
/// Returns the full matched text of each occurrence, in file order.
pub fn find_all(path: &Path, needle: &str) -> Result<Vec<String>> {
    check_log_file_exists(path)?;
    let contents = fs::read_to_string(path)?;
    let pattern = line_pattern(needle)?;

    Ok(pattern
        .find_iter(&contents)
        .map(|m| m.as_str().to_string())
        .collect())
}

/// Pattern matching the needle followed by the rest of its line
///
/// `.` does not cross newlines, so the match stops before the terminator.
fn line_pattern(needle: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("{needle}.*"))?)
}
