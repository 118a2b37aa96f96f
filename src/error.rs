//! Failure modes of changelog extraction.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a release section from being printed.
#[derive(Debug, Error)]
pub enum Error {
    /// An input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying filesystem error.
        source: io::Error,
    },
    /// Too few `## ` headings to bound a release section.
    #[error("insufficient section markers: found {found}, need at least 2")]
    InsufficientMarkers {
        /// Number of `## ` heading lines seen.
        found: usize,
    },
    /// The preferences file exists but does not parse.
    #[error("invalid config {}: {message}", path.display())]
    Config {
        /// Preferences file that was rejected.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
    /// Writing the section to the output stream failed.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    /// The section could not be serialised.
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
