//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! We look for a relnotes.toml in the working directory, and if present we load settings
//! from there. Without one, every preference keeps its default.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the preferences file looked up in the working directory.
pub const CONFIG_FILE: &str = "relnotes.toml";

#[derive(Facet, Clone, Debug, Default, PartialEq, Eq)]
#[facet(deny_unknown_fields)]
/// User preferences loaded from relnotes.toml or falling back to defaults.
pub struct Config {
    #[facet(default = false)]
    /// Print a lone release section through to the end of the file instead of failing.
    pub trailing_section: bool,
}

impl Config {
    /// Load configuration from relnotes.toml if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, using defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(Error::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        facet_toml::from_str::<Self>(&contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
