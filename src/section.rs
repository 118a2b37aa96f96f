//! Release sections of a changelog.
//!
//! A release section starts at a line beginning with `## ` and runs until the next such
//! line. The newest release comes first, so its section is bounded by the first two
//! markers. Lines before the first marker (the `# Changelog` title, preamble text) are
//! never part of a release.

use crate::config::Config;
use crate::document::Document;
use crate::error::{Error, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Literal prefix of a release heading line.
pub const MARKER: &str = "## ";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Contiguous block of changelog lines belonging to one release.
pub struct Section {
    /// Heading text without the `## ` prefix.
    pub title: String,
    /// Index of the heading line (zero-based, inclusive).
    pub line_start: usize,
    /// Index where the next release begins or the document ends (exclusive).
    pub line_end: usize,
    /// Verbatim lines from `line_start` up to `line_end`.
    pub lines: Vec<String>,
}

#[must_use]
/// Indices of every line that opens a release section, in ascending order.
///
/// Only an exact `## ` prefix counts: `##v1` and `### Added` are body lines.
pub fn section_markers(doc: &Document) -> Vec<usize> {
    doc.lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with(MARKER))
        .map(|(i, _)| i)
        .collect()
}

/// Extract the first release section of `doc`.
///
/// The window runs from the first marker up to the second. With a single marker the
/// section is only returned when `cfg.trailing_section` is set, in which case it runs to
/// the end of the document.
///
/// # Errors
///
/// Returns [`Error::InsufficientMarkers`] when the document has no marker, or one marker
/// without the trailing-section preference.
pub fn first_release(doc: &Document, cfg: &Config) -> Result<Section> {
    let markers = section_markers(doc);
    debug!(lines = doc.len(), ?markers, "scanned changelog");

    let (start, end) = match markers.as_slice() {
        [start, end, ..] => (*start, *end),
        [start] if cfg.trailing_section => {
            warn!(line = *start, "only one release heading, printing to end of file");
            (*start, doc.len())
        }
        _ => {
            return Err(Error::InsufficientMarkers {
                found: markers.len(),
            })
        }
    };
    info!(line_start = start, line_end = end, "selected release section");

    let lines = doc.lines()[start..end].to_vec();
    let title = lines[0]
        .strip_prefix(MARKER)
        .unwrap_or(lines[0].as_str())
        .trim()
        .to_string();

    Ok(Section {
        title,
        line_start: start,
        line_end: end,
        lines,
    })
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
