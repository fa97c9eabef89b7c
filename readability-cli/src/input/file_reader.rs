//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads input documents as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text, unchanged
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file and concatenate its lines without separators
    ///
    /// A terminator followed only by a line break is not a sentence boundary
    /// in the joined text, which keeps counts comparable with earlier reports.
    pub fn read_joined_lines(path: &Path) -> Result<String> {
        Self::read_text(path).map(|content| join_lines(&content))
    }

    /// Read a file in the requested mode
    pub fn load(path: &Path, keep_newlines: bool) -> Result<String> {
        if keep_newlines {
            Self::read_text(path)
        } else {
            Self::read_joined_lines(path)
        }
    }
}

/// Drop every line terminator (`\n`, `\r\n` or a lone `\r`)
pub fn join_lines(content: &str) -> String {
    content.chars().filter(|&ch| ch != '\n' && ch != '\r').collect()
}
