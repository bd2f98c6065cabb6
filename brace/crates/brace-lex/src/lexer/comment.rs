//! Comment lexing.
//!
//! Comments are kept as tokens: the opener, an optional whitespace token,
//! body text, and for block comments the `*/` closer. Block comments nest,
//! and linebreaks inside them are emitted as real `Linebreak` tokens
//! followed by any indentation as `Whitespace`.

use crate::token::Token;
use crate::unicode::is_linebreak;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// `/*` or `//` as a `StartOfScope` token.
    pub(super) fn lex_comment_opener(&mut self) -> Option<Token> {
        self.cursor
            .match_literal("/*")
            .or_else(|| self.cursor.match_literal("//"))
            .map(Token::start_of_scope)
    }

    /// Consumes the rest of a `//` line comment whose opener is on top of
    /// the scope stack, then closes that scope. The linebreak ending the
    /// comment is left for the main loop.
    pub(super) fn lex_line_comment(&mut self) {
        self.push_optional_whitespace();
        if let Some(body) = self.cursor.match_run(|c| !is_linebreak(c)) {
            self.tokens.push(Token::comment_body(body));
        }
        self.scopes.pop();
    }

    /// Starts a block comment whose `/*` is on top of the scope stack.
    pub(super) fn lex_block_comment(&mut self) {
        self.push_optional_whitespace();
        self.process_comment_body();
    }

    /// Consumes block comment content until the outermost open `/*` is
    /// closed or input runs out.
    pub(super) fn process_comment_body(&mut self) {
        let mut start = self.cursor.position();
        loop {
            if self.cursor.starts_with("/*") {
                self.flush_body(Token::comment_body, start);
                self.cursor.match_literal("/*");
                self.push_scope(Token::start_of_scope("/*"));
            } else if self.cursor.starts_with("*/") {
                self.flush_body(Token::comment_body, start);
                self.cursor.match_literal("*/");
                self.tokens.push(Token::end_of_scope("*/"));
                self.scopes.pop();
                if !self.top_scope_is("/*") {
                    return;
                }
            } else if self.cursor.peek().is_some_and(is_linebreak) {
                self.flush_body(Token::comment_body, start);
                if let Some(linebreak) = self.lex_linebreak() {
                    self.tokens.push(linebreak);
                }
                self.push_optional_whitespace();
            } else if self.cursor.advance().is_none() {
                self.flush_body(Token::comment_body, start);
                return;
            } else {
                continue;
            }
            start = self.cursor.position();
        }
    }

    fn push_optional_whitespace(&mut self) {
        if let Some(whitespace) = self.lex_whitespace() {
            self.tokens.push(whitespace);
        }
    }
}
