//! Core lexer implementation.
//!
//! [`Lexer`] holds all state for one `tokenize` run: the cursor, the token
//! table, the scope stack and the bookkeeping used to revisit `<` `>`
//! decisions. The driver asks the classifiers for one token at a time,
//! appends it, and hands it to the scope state machine, which may rewrite
//! earlier tokens or consume more input itself (string and comment bodies).

use brace_util::{IndexVec, Span};

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult, REMAINING_EXCERPT_CHARS};
use crate::token::{Token, TokenIdx};
use crate::unicode::{is_horizontal_whitespace, is_linebreak};

use super::generic::ClosedGeneric;

/// Lexer context for a single source string.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Emitted tokens. Mostly appended to, but generic resolution replaces
    /// and removes entries near the tail.
    pub(super) tokens: IndexVec<TokenIdx, Token>,

    /// Open scopes, innermost last. Each entry is a `StartOfScope` token or
    /// a tentative `Operator "<"`.
    pub(super) scopes: Vec<TokenIdx>,

    /// Most recent token that is not whitespace, a comment or a linebreak.
    pub(super) last_significant: Option<TokenIdx>,

    /// Openers of generic lists already closed by a `>`, most recent last.
    /// Popped again if the closer turns out to be an operator.
    pub(super) closed_generics: Vec<ClosedGeneric>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: IndexVec::new(),
            scopes: Vec::new(),
            last_significant: None,
            closed_generics: Vec::new(),
        }
    }

    /// Lexes the whole source.
    ///
    /// On success, the texts of the returned tokens concatenate to the
    /// source. Fails with [`LexError::UnexpectedCharacter`] at the first
    /// character no classifier accepts.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        while let Some(token) = self.next_token()? {
            self.tokens.push(token);
            self.process()?;
        }
        self.finish()?;
        Ok(self.tokens.into_raw())
    }

    /// Produces the next token from the classifiers, in priority order.
    /// `Ok(None)` means end of input.
    pub(super) fn next_token(&mut self) -> LexResult<Option<Token>> {
        if self.cursor.is_at_end() {
            return Ok(None);
        }
        let token = self
            .lex_whitespace()
            .or_else(|| self.lex_comment_opener())
            .or_else(|| self.lex_identifier())
            .or_else(|| self.lex_number())
            .or_else(|| self.lex_operator())
            .or_else(|| self.lex_scope_delimiter())
            .or_else(|| self.lex_linebreak());
        match token {
            Some(token) => Ok(Some(token)),
            None => Err(self.unexpected_character()),
        }
    }

    pub(super) fn lex_whitespace(&mut self) -> Option<Token> {
        self.cursor
            .match_run(is_horizontal_whitespace)
            .map(Token::whitespace)
    }

    pub(super) fn lex_scope_delimiter(&mut self) -> Option<Token> {
        let c = self
            .cursor
            .match_one(|c| matches!(c, '(' | '[' | '{' | '"' | '}' | ']' | ')'))?;
        Some(match c {
            '(' | '[' | '{' | '"' => Token::start_of_scope(c),
            _ => Token::end_of_scope(c),
        })
    }

    pub(super) fn lex_linebreak(&mut self) -> Option<Token> {
        if let Some(crlf) = self.cursor.match_literal("\r\n") {
            return Some(Token::linebreak(crlf));
        }
        self.cursor.match_one(is_linebreak).map(Token::linebreak)
    }

    fn unexpected_character(&self) -> LexError {
        let start = self.cursor.position();
        let character = self.cursor.peek().unwrap_or_default();
        LexError::UnexpectedCharacter {
            character,
            span: Span::new(
                start,
                start + character.len_utf8(),
                self.cursor.line(),
                self.cursor.column(),
            ),
            remaining: self
                .cursor
                .remaining()
                .chars()
                .take(REMAINING_EXCERPT_CHARS)
                .collect(),
        }
    }

    /// Bounds-checked read of an emitted token.
    pub(super) fn token(&self, idx: TokenIdx) -> LexResult<&Token> {
        self.tokens.get(idx).ok_or(LexError::ScopeInvariant {
            index: idx.0 as usize,
            reason: "index past the end of the token table",
        })
    }

    /// Appends a token and opens a scope on it.
    pub(super) fn push_scope(&mut self, token: Token) -> TokenIdx {
        let idx = self.tokens.push(token);
        self.scopes.push(idx);
        idx
    }

    /// Appends `text` as a body token unless it is empty.
    pub(super) fn flush_body(&mut self, make: fn(&'a str) -> Token, start: usize) {
        let text = self.cursor.slice_from(start);
        if !text.is_empty() {
            self.tokens.push(make(text));
        }
    }
}
