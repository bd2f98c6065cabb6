//! Diagnostic codes.
//!
//! Codes are a prefix letter plus a four-digit number: `E` for errors,
//! `W` for warnings. Lexer codes live in the 1000 range.
//!
//! ```
//! use brace_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    pub prefix: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.prefix.as_bytes(), [b'E', ..])
    }

    // =========================================================================
    // LEXER ERRORS (E1000-E1999)
    // =========================================================================

    /// No token classifier accepts the next character.
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// The lexer's own scope bookkeeping went inconsistent.
    pub const E_LEXER_INTERNAL: Self = Self::new("E", 1099);

    // =========================================================================
    // LEXER WARNINGS (W1000-W1999)
    // =========================================================================

    /// A scope was opened and never closed, or closed without being opened.
    pub const W_UNBALANCED_SCOPE: Self = Self::new("W", 1001);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({self})")
    }
}
