//! Common types and utilities for bracet commands.

use std::path::Path;

use brace_lex::{LexError, Token};
use brace_util::{SourceFile, Span};

use crate::error::{BracetError, Result};

// ============================================================================
// Input
// ============================================================================

/// Reads a source file, rejecting paths that are not regular files.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(BracetError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

// ============================================================================
// Token Output
// ============================================================================

/// `KIND<TAB>"escaped text"`.
pub fn format_token_line(token: &Token) -> String {
    format!("{}\t{:?}", token.kind, token.text)
}

/// Byte offset where each token starts, followed by the end of the last one.
pub fn token_offsets(tokens: &[Token]) -> Vec<usize> {
    std::iter::once(0)
        .chain(tokens.iter().scan(0, |offset, token| {
            *offset += token.text.len();
            Some(*offset)
        }))
        .collect()
}

/// Span of the token at `index`, located in `file`. `offsets` comes from
/// [`token_offsets`].
pub fn token_span(file: &SourceFile, offsets: &[usize], index: usize) -> Span {
    let end_of_source = offsets.last().copied().unwrap_or(0);
    let start = offsets.get(index).copied().unwrap_or(end_of_source);
    let end = offsets.get(index + 1).copied().unwrap_or(start);
    let (line, column) = file.offset_to_line_col(start);
    Span::new(start, end, line as u32, column as u32).with_file_id(file.id())
}

/// Lex error rendered with a snippet of the offending line.
pub fn render_lex_error(file: &SourceFile, err: &LexError) -> String {
    let mut diagnostic = err.to_diagnostic();
    diagnostic.span = diagnostic.span.with_file_id(file.id());
    diagnostic.render(Some(file))
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Error when the configuration file already exists.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force to overwrite):";
}
