//! Error types for Arrowsmith operations.
//!
//! This module provides the main error type [`ArrowsmithError`] which wraps
//! the error conditions of a conversion.

use std::io;

use thiserror::Error;

use arrowsmith_parser::error::ParseError;

use crate::export;

/// The main error type for Arrowsmith operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries every diagnostic of the failed run together
/// with the schema text their spans point into, so callers can render
/// source snippets.
#[derive(Debug, Error)]
pub enum ArrowsmithError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Export error: {0}")]
    Export(#[from] export::Error),
}

impl ArrowsmithError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
