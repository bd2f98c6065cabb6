//! Identifier lexing.

use crate::token::Token;
use crate::unicode::{is_identifier_continuation, is_identifier_head};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, including `` `escaped` `` names.
    ///
    /// `#if` and `#endif` are the only words with a fixed meaning: they open
    /// and close a conditional compilation scope.
    pub(super) fn lex_identifier(&mut self) -> Option<Token> {
        if let Some(escaped) = self.lex_escaped_identifier() {
            return Some(escaped);
        }
        let start = self.cursor.position();
        self.cursor.match_one(is_identifier_head)?;
        self.cursor.match_run(is_identifier_continuation);
        let text = self.cursor.slice_from(start);
        Some(match text {
            "#if" => Token::start_of_scope(text),
            "#endif" => Token::end_of_scope(text),
            _ => Token::identifier(text),
        })
    }

    /// `` `name` `` as a single identifier token, backticks included.
    fn lex_escaped_identifier(&mut self) -> Option<Token> {
        let snapshot = self.cursor.snapshot();
        if !self.cursor.match_char('`') {
            return None;
        }
        let matched = self.cursor.match_one(is_identifier_head).is_some() && {
            self.cursor.match_run(is_identifier_continuation);
            self.cursor.match_char('`')
        };
        if matched {
            Some(Token::identifier(self.cursor.slice_from(snapshot.position)))
        } else {
            self.cursor.restore(snapshot);
            None
        }
    }
}
