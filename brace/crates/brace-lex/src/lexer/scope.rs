//! Scope state machine.
//!
//! Runs once for every token the driver appends. A step may rewrite
//! earlier tokens, open or close scopes, or consume more input through the
//! string and comment body processors. When a step changes the context the
//! current token is judged in, it returns [`Flow::Again`] and the same
//! token (always the last one in the table) is processed again. That loop
//! replaces recursion, so long `>>>>` chains cannot grow the call stack.

use crate::error::LexResult;
use crate::token::{Token, TokenIdx, TokenKind};
use crate::Lexer;

/// Outcome of one state machine step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Flow {
    /// Re-run the state machine on the last token.
    Again,
    Done,
}

impl<'a> Lexer<'a> {
    /// Processes the last token until the state machine settles.
    pub(super) fn process(&mut self) -> LexResult<()> {
        while self.step()? == Flow::Again {}
        Ok(())
    }

    fn step(&mut self) -> LexResult<Flow> {
        let Some(current) = self.tokens.last_idx() else {
            return Ok(Flow::Done);
        };
        let token = self.token(current)?.clone();

        // a `>` closer followed by something that makes it an operator
        if !token.is_whitespace_or_comment_or_linebreak() {
            if let Some(prev) = self.last_significant.filter(|&prev| prev != current) {
                if self.token(prev)?.is(TokenKind::EndOfScope, ">") && Self::closer_was_operator(&token) {
                    self.revert_closed_generics(prev, current)?;
                    return Ok(Flow::Again);
                }
            }
            self.last_significant = Some(current);
        }

        if let Some(&scope) = self.scopes.last() {
            let opener = self.token(scope)?.clone();

            if token.closes_scope_for_token(&opener) {
                self.scopes.pop();
                if opener.text == "<" {
                    return self.close_generic(scope, current, &token);
                }
                self.resume_body();
                return Ok(Flow::Done);
            }

            if opener.is(TokenKind::StartOfScope, "<") {
                if token.kind == TokenKind::EndOfScope {
                    self.disprove_generic(scope)?;
                    return Ok(Flow::Again);
                }
                if let Some(flow) = self.split_suffix_before_closer(current, &token)? {
                    return Ok(flow);
                }
            } else if opener.is(TokenKind::Operator, "<") {
                if let Some(flow) = self.resolve_tentative_generic(scope, &token)? {
                    return Ok(flow);
                }
            }
        }

        if token.kind == TokenKind::StartOfScope {
            self.scopes.push(current);
            match token.text.as_str() {
                "\"" => self.process_string_body(),
                "/*" => self.lex_block_comment(),
                "//" => self.lex_line_comment(),
                _ => {},
            }
        } else if token.is(TokenKind::Operator, "<") {
            self.scopes.push(current);
        }
        Ok(Flow::Done)
    }

    /// After a scope closes, continues the string or comment it was nested
    /// in.
    fn resume_body(&mut self) {
        if self.top_scope_is("\"") {
            self.process_string_body();
        } else if self.top_scope_is("/*") {
            self.process_comment_body();
        }
    }

    /// Whether the innermost open scope is a `StartOfScope` with `text`.
    pub(super) fn top_scope_is(&self, text: &str) -> bool {
        self.scopes
            .last()
            .and_then(|&idx| self.tokens.get(idx))
            .is_some_and(|opener| opener.is(TokenKind::StartOfScope, text))
    }

    /// End-of-input cleanup: a `<` still open never found its closer, so it
    /// is an operator.
    pub(super) fn finish(&mut self) -> LexResult<()> {
        let open_angles: Vec<TokenIdx> = self
            .scopes
            .iter()
            .copied()
            .filter(|&idx| self.tokens.get(idx).is_some_and(|t| t.text == "<"))
            .collect();
        let unclosed = self.scopes.len() - open_angles.len();
        for idx in open_angles {
            self.tokens.replace(idx, Token::operator("<"))?;
        }
        self.scopes.clear();
        log::debug!(
            "lexed {} tokens, {} scope(s) left open",
            self.tokens.len(),
            unclosed
        );
        Ok(())
    }
}
