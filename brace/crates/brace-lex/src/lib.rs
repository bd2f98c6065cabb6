//! brace-lex - Lossless lexer for brace-delimited, Swift-like source
//!
//! Every byte of the input ends up in exactly one token, so concatenating
//! the token texts gives back the original source. Comments, whitespace and
//! string contents are tokens like any other, which makes the output
//! suitable for formatters and linters rather than only for parsers.
//!
//! # Example Usage
//!
//! ```
//! use brace_lex::{tokenize, Token};
//!
//! let tokens = tokenize("let xs = Array<Int>()").unwrap();
//! assert_eq!(tokens[0], Token::identifier("let"));
//! assert_eq!(tokens[7], Token::start_of_scope("<"));
//! assert_eq!(tokens[9], Token::end_of_scope(">"));
//!
//! let text: String = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(text, "let xs = Array<Int>()");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the scope pairing rules
//! - [`lexer`] - Scanner driver and scope state machine
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Identifier and operator character classes
//! - [`validate`] - Losslessness and scope balance checks
//! - [`error`] - Fatal lexing errors
//!
//! # Generics
//!
//! `<` is ambiguous: `a < b` compares, `Array<Int>` parameterizes. The
//! lexer guesses as it goes and rewrites earlier tokens once later input
//! settles the question. A `<` becomes a scope only when its matching `>`
//! is found and nothing after the `>` proves it was an operator after all.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;
pub mod validate;

mod edge_cases;

pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{Token, TokenIdx, TokenKind};

/// Splits `source` into tokens.
///
/// Fails only when a character fits none of the token classes, for
/// example a backslash outside a string.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_declaration() {
        assert_eq!(
            tokenize("let x = 42").unwrap(),
            vec![
                Token::identifier("let"),
                Token::whitespace(" "),
                Token::identifier("x"),
                Token::whitespace(" "),
                Token::operator("="),
                Token::whitespace(" "),
                Token::number("42"),
            ]
        );
    }

    #[test]
    fn test_function_with_generic_signature() {
        let source = "func map<T>(_ f: (Element) -> T) -> [T] {\n    return []\n}\n";
        let tokens = tokenize(source).unwrap();
        assert!(validate::is_lossless(source, &tokens));
        assert!(validate::scope_issues(&tokens).is_empty());
        assert_eq!(tokens[3], Token::start_of_scope("<"));
        assert_eq!(tokens[5], Token::end_of_scope(">"));
        assert!(tokens.contains(&Token::operator("->")));
    }

    #[test]
    fn test_comparison_chain_stays_operators() {
        let tokens = tokenize("if a < b && c > d {}").unwrap();
        assert!(tokens.contains(&Token::operator("<")));
        assert!(tokens.contains(&Token::operator(">")));
        assert!(!tokens.iter().any(|t| t.text == "<" && t.kind != TokenKind::Operator));
    }

    #[test]
    fn test_every_kind_appears() {
        let found = kinds("x = 1 // c\n\"s\"");
        for kind in TokenKind::ALL {
            assert!(found.contains(&kind), "missing {kind}");
        }
    }

    #[test]
    fn test_unexpected_character_is_fatal() {
        let err = tokenize("let a = \\b").unwrap_err();
        match err {
            LexError::UnexpectedCharacter {
                character,
                span,
                remaining,
            } => {
                assert_eq!(character, '\\');
                assert_eq!(span.start, 8);
                assert_eq!((span.line, span.column), (1, 9));
                assert_eq!(remaining, "\\b");
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_source() {
        assert!(tokenize("").unwrap().is_empty());
    }
}
