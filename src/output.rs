//! Rendering an extracted section for stdout.
//!
//! Plain output writes each line verbatim followed by a newline. JSON output mirrors the
//! [`Section`] fields so release tooling can pick out the title or line range.

use crate::error::Result;
use crate::section::Section;
use std::io::Write;

/// How the extracted section is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One changelog line per output line.
    #[default]
    Plain,
    /// Pretty-printed JSON object.
    Json,
}

/// Write `section` to `out` in the requested format.
///
/// # Errors
///
/// Returns an error if writing to `out` or JSON encoding fails.
pub fn write_section<W: Write>(
    out: &mut W,
    section: &Section,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Plain => write_plain(out, section),
        OutputFormat::Json => write_json(out, section),
    }
}

/// Write each line of `section` followed by a newline.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_plain<W: Write>(out: &mut W, section: &Section) -> Result<()> {
    for line in &section.lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

/// Write `section` as a pretty JSON object.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn write_json<W: Write>(out: &mut W, section: &Section) -> Result<()> {
    let json = serde_json::to_string_pretty(section)?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/output.rs"]
mod tests;
