//! relnotes: print the latest release section of a changelog.
//!
//! A changelog is split into release sections by `## ` headings. The newest release sits
//! first, so the notes for it are the lines from the first heading up to the second.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod section;

pub use error::{Error, Result};
