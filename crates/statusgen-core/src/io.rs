//! Whole-file reads and writes of line sequences.

use std::fs;
use std::path::Path;

use statusgen_blocks::{join_lines, split_lines};

use crate::{Error, Result};

/// Read a file as a line sequence, each line keeping its terminator.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(split_lines(&content))
}

/// Overwrite a file with the given line sequence.
///
/// This is a plain truncate-and-write: no lock is taken and no temporary
/// file is renamed into place.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    fs::write(path, join_lines(lines)).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "wrote file");
    Ok(())
}

/// Read a whole text file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
