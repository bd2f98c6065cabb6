//! String body lexing.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes string content after an open quote on top of the scope
    /// stack.
    ///
    /// Stops at the closing quote (emitting it and closing the scope), at
    /// an interpolation `\(` (opening a paren scope and handing control
    /// back to the main loop), or at end of input. The backslash of an
    /// interpolation stays in the preceding body so no text is lost.
    pub(super) fn process_string_body(&mut self) {
        let start = self.cursor.position();
        let mut escaped = false;
        loop {
            match self.cursor.peek() {
                None => {
                    self.flush_body(Token::string_body, start);
                    return;
                },
                Some('"') if !escaped => {
                    self.flush_body(Token::string_body, start);
                    self.cursor.advance();
                    self.tokens.push(Token::end_of_scope("\""));
                    self.scopes.pop();
                    return;
                },
                Some('(') if escaped => {
                    self.flush_body(Token::string_body, start);
                    self.cursor.advance();
                    self.push_scope(Token::start_of_scope("("));
                    return;
                },
                Some('\\') => {
                    self.cursor.advance();
                    escaped = !escaped;
                },
                Some(_) => {
                    self.cursor.advance();
                    escaped = false;
                },
            }
        }
    }
}
