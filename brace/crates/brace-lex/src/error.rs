//! Lexer errors.

use brace_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, IndexVecError, Span};
use thiserror::Error;

/// Longest excerpt of unconsumed input kept in
/// [`LexError::UnexpectedCharacter`].
pub const REMAINING_EXCERPT_CHARS: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No classifier accepts the character at `span`.
    #[error("unexpected character {character:?} at line {}, column {}", .span.line, .span.column)]
    UnexpectedCharacter {
        character: char,
        span: Span,
        /// Start of the unconsumed input, for context.
        remaining: String,
    },

    /// An edit of already-emitted tokens went out of bounds.
    #[error("token table edit failed: {0}")]
    TokenTable(#[from] IndexVecError),

    /// The scope bookkeeping pointed at a token of the wrong kind.
    #[error("scope invariant violated at token {index}: {reason}")]
    ScopeInvariant { index: usize, reason: &'static str },
}

pub type LexResult<T> = std::result::Result<T, LexError>;

impl LexError {
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::UnexpectedCharacter { span, .. } => Some(*span),
            _ => None,
        }
    }

    /// True for errors caused by the input rather than by the lexer.
    pub fn is_input_error(&self) -> bool {
        matches!(self, LexError::UnexpectedCharacter { .. })
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::UnexpectedCharacter {
                character,
                span,
                remaining,
            } => DiagnosticBuilder::error(format!("unexpected character {character:?}"))
                .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
                .span(*span)
                .note(format!("remaining input starts with {remaining:?}"))
                .build(),
            other => DiagnosticBuilder::error(other.to_string())
                .code(DiagnosticCode::E_LEXER_INTERNAL)
                .help("this is a lexer bug; please report it with the input that triggered it")
                .build(),
        }
    }
}
