//! Operator and punctuation lexing.

use crate::token::Token;
use crate::unicode::{is_operator_continuation, is_operator_head};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the longest operator run, or one of `:` `;` `,`.
    ///
    /// A run stops before a `//` or `/*` comment opener, and a `.` only
    /// continues an operator that itself started with `.` (`?.` is two
    /// tokens, `...` and `..<` are one).
    pub(super) fn lex_operator(&mut self) -> Option<Token> {
        let start = self.cursor.position();
        let head = match self.cursor.peek() {
            Some(c) if is_operator_head(c) && !self.at_comment_opener() => c,
            _ => return self.lex_punctuation(),
        };
        self.cursor.advance();
        while let Some(c) = self.cursor.peek() {
            if !is_operator_continuation(c) || (c == '.' && head != '.') || self.at_comment_opener() {
                break;
            }
            self.cursor.advance();
        }
        Some(Token::operator(self.cursor.slice_from(start)))
    }

    fn lex_punctuation(&mut self) -> Option<Token> {
        self.cursor
            .match_one(|c| matches!(c, ':' | ';' | ','))
            .map(Token::operator)
    }

    #[inline]
    fn at_comment_opener(&self) -> bool {
        self.cursor.starts_with("//") || self.cursor.starts_with("/*")
    }
}
