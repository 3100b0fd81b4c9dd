//! Substring removal from each line of a file.
//!
//! Despite the command name this is a global replace, not a leading-prefix
//! strip: every occurrence of the substring on a line is removed.

use std::path::Path;

use crate::error::RecopsError;

/// Remove every occurrence of `pattern` from `line`, then trim.
pub fn strip_all(line: &str, pattern: &str) -> String {
    line.replace(pattern, "").trim().to_string()
}

/// Print each line of `file` with the substring removed.
pub fn run(file: &Path, pattern: &str) -> Result<(), RecopsError> {
    let contents = std::fs::read_to_string(file)?;
    for line in contents.lines() {
        println!("{}", strip_all(line, pattern));
    }
    Ok(())
}
