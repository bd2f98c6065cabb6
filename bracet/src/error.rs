//! Error handling module for the bracet CLI.

use std::path::PathBuf;

use brace_lex::LexError;
use brace_util::SourceMapError;
use thiserror::Error;

/// Main error type for the bracet CLI application.
#[derive(Error, Debug)]
pub enum BracetError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A source file could not be lexed.
    #[error("{}: {source}", path.display())]
    Lex {
        path: PathBuf,
        #[source]
        source: LexError,
    },

    /// `check` found problems in one or more files.
    #[error("{failed} of {total} file(s) failed the check")]
    CheckFailed { failed: usize, total: usize },

    /// A source file lookup failed.
    #[error("Source map error: {0}")]
    SourceMap(#[from] SourceMapError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using BracetError.
pub type Result<T> = std::result::Result<T, BracetError>;
