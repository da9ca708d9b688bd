//! Error types for Strata operations.
//!
//! Parsing and rendering never fail; [`StrataError`] covers the surfaces
//! around them, such as configuration checks and writing output.

use std::io;

use thiserror::Error;

/// The main error type for Strata operations.
#[derive(Debug, Error)]
pub enum StrataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
