//! The changelog as an immutable sequence of lines.
//!
//! Lines are split on `\n` exactly, so a trailing newline leaves an empty final line and
//! carriage returns stay attached to the line they end. Printing a slice of lines joined
//! by `\n` gives back the same bytes as the original file.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Name of the changelog read from the working directory.
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Full text of a changelog, held line by line.
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Read the whole file at `path` and split it into lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file is missing or unreadable.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    #[must_use]
    /// Split `text` on every newline character.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }

    #[must_use]
    /// Lines in file order, without their `\n` terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    /// Number of lines, counting the empty line after a trailing newline.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// Never true for a parsed document: empty text still yields one empty line.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
