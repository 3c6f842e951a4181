//! Text input readers

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::ServerError;

/// Input name that reads standard input
pub const STDIN_MARKER: &str = "-";

/// Reads UTF-8 text from files or standard input
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ServerError::FileNotFound(path.display().to_string()).into());
        }
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read everything from `reader`
    pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .context("Failed to read input as UTF-8")?;
        Ok(text)
    }

    pub fn read_stdin() -> Result<String> {
        Self::read_from(io::stdin().lock())
    }
}
