//! Generic parameter lists versus comparison operators.
//!
//! A `<` is pushed as a tentative scope while still an `Operator`. It is
//! promoted to `StartOfScope` when an identifier or opening bracket
//! follows, and dropped back to a plain operator when anything else does.
//! A promoted `<` closes on the next `>`-prefixed token, which is split
//! into `EndOfScope(">")` and whatever operator text followed it. That
//! decision can still be undone by the next significant token: if it reads
//! as the right operand of a comparison or shift, the closer (and any
//! closers chained directly before it) become operators again and their
//! openers go back to `Operator "<"`.

use brace_util::Idx;

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenIdx, TokenKind};
use crate::Lexer;

use super::scope::Flow;

/// Words that may follow a generic type without making its `>` an
/// operator (`for x in Array<Int>()`, `x as Foo<T> else`).
const CONTEXTUAL_KEYWORDS: [&str; 5] = ["in", "is", "as", "where", "else"];

/// Operators that may follow a generic type's `>`.
const GENERIC_SUFFIX_OPERATORS: [&str; 8] = ["->", ">", ",", ":", ";", "?", "!", "."];

/// A generic list whose `>` has been emitted as `EndOfScope`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ClosedGeneric {
    pub(super) opener: TokenIdx,
    /// Operator text split off the closer's lexeme (`=` of `>=`), pushed
    /// right after the closer.
    pub(super) remainder: Option<TokenIdx>,
}

impl<'a> Lexer<'a> {
    /// Whether `token`, following an `EndOfScope(">")`, shows that the `>`
    /// was really an operator.
    pub(super) fn closer_was_operator(token: &Token) -> bool {
        let text = token.text.as_str();
        match token.kind {
            TokenKind::Identifier | TokenKind::Number => !CONTEXTUAL_KEYWORDS.contains(&text),
            TokenKind::StartOfScope => text == "\"",
            TokenKind::Operator => {
                !(GENERIC_SUFFIX_OPERATORS.contains(&text)
                    || text.starts_with('>')
                    || text.starts_with("?>")
                    || text.starts_with("!>"))
            },
            _ => false,
        }
    }

    /// Decides a tentative `<` on top of the scope stack. `None` leaves it
    /// undecided (whitespace, comments and linebreaks carry no evidence).
    pub(super) fn resolve_tentative_generic(
        &mut self,
        opener: TokenIdx,
        token: &Token,
    ) -> LexResult<Option<Flow>> {
        if token.is_whitespace_or_comment_or_linebreak() {
            return Ok(None);
        }
        let text = token.text.as_str();
        let promote = match token.kind {
            TokenKind::Identifier => true,
            TokenKind::StartOfScope => matches!(text, "<" | "[" | "("),
            TokenKind::Operator => text.starts_with("?>") || text.starts_with("!>"),
            _ => false,
        };
        if promote {
            self.tokens.replace(opener, Token::start_of_scope("<"))?;
            log::trace!("token {}: `<` opens a generic list", opener.0);
        } else {
            self.scopes.pop();
            log::trace!("token {}: `<` is an operator before {:?}", opener.0, token.text);
        }
        Ok(Some(Flow::Again))
    }

    /// Splits `?>` / `!>` inside a generic list so the `>` can close it
    /// (`Array<Int?>`).
    pub(super) fn split_suffix_before_closer(
        &mut self,
        current: TokenIdx,
        token: &Token,
    ) -> LexResult<Option<Flow>> {
        if token.kind != TokenKind::Operator
            || !(token.text.starts_with("?>") || token.text.starts_with("!>"))
        {
            return Ok(None);
        }
        let (suffix, rest) = token.text.split_at(1);
        self.tokens.replace(current, Token::operator(suffix))?;
        self.tokens.push(Token::operator(rest));
        log::trace!("token {}: split {:?} before generic closer", current.0, token.text);
        Ok(Some(Flow::Again))
    }

    /// A confirmed generic list was interrupted by a closer that belongs to
    /// an enclosing scope, so the `<` was a comparison after all.
    pub(super) fn disprove_generic(&mut self, opener: TokenIdx) -> LexResult<()> {
        self.tokens.replace(opener, Token::operator("<"))?;
        self.scopes.pop();
        log::trace!("token {}: generic list interrupted, `<` is an operator", opener.0);
        Ok(())
    }

    /// Turns the `>`-prefixed `token` at `current` into `EndOfScope(">")`
    /// for the generic opened at `opener`. Any text after the `>` becomes a
    /// new operator token that still needs processing.
    pub(super) fn close_generic(
        &mut self,
        opener: TokenIdx,
        current: TokenIdx,
        token: &Token,
    ) -> LexResult<Flow> {
        self.tokens.replace(current, Token::end_of_scope(">"))?;
        match token.text.get(1..) {
            Some(rest) if !rest.is_empty() => {
                let remainder = self.tokens.push(Token::operator(rest));
                self.closed_generics.push(ClosedGeneric {
                    opener,
                    remainder: Some(remainder),
                });
                log::trace!("token {}: split {:?} after generic closer", current.0, token.text);
                Ok(Flow::Again)
            },
            _ => {
                self.closed_generics.push(ClosedGeneric {
                    opener,
                    remainder: None,
                });
                Ok(Flow::Done)
            },
        }
    }

    /// Undoes the generic closer at `closer` and every closer split from
    /// the same lexeme before it, merging them back into one operator. The
    /// current token is merged too when it is the operator split off this
    /// closer. Separate lexemes (`>` then `...`) stay separate.
    pub(super) fn revert_closed_generics(
        &mut self,
        closer: TokenIdx,
        current: TokenIdx,
    ) -> LexResult<()> {
        let closed = self.reopen_generic_as_operator()?;
        let current_token = self.token(current)?.clone();
        if closed.remainder == Some(current) && current_token.kind == TokenKind::Operator {
            self.tokens
                .replace(closer, Token::operator(format!(">{}", current_token.text)))?;
            self.tokens.remove(current)?;
        } else {
            self.tokens.replace(closer, Token::operator(">"))?;
        }

        let mut idx = closer.index();
        while idx > 0
            && self
                .tokens
                .get(TokenIdx::from_usize(idx - 1))
                .is_some_and(|t| t.is(TokenKind::EndOfScope, ">"))
            && self
                .closed_generics
                .last()
                .is_some_and(|c| c.remainder == Some(TokenIdx::from_usize(idx)))
        {
            self.reopen_generic_as_operator()?;
            let tail = self.tokens.remove(TokenIdx::from_usize(idx))?;
            self.tokens
                .replace(TokenIdx::from_usize(idx - 1), Token::operator(format!(">{}", tail.text)))?;
            idx -= 1;
        }

        self.last_significant = None;
        log::trace!(
            "token {}: generic closer reverted to operator {:?}",
            idx,
            self.tokens.get(TokenIdx::from_usize(idx)).map(|t| t.text.as_str())
        );
        Ok(())
    }

    /// Pops the most recently closed generic and turns its opener back
    /// into `Operator "<"`.
    fn reopen_generic_as_operator(&mut self) -> LexResult<ClosedGeneric> {
        let closed = self.closed_generics.pop().ok_or(LexError::ScopeInvariant {
            index: self.tokens.len(),
            reason: "generic closer has no recorded opener",
        })?;
        if !self.token(closed.opener)?.is(TokenKind::StartOfScope, "<") {
            return Err(LexError::ScopeInvariant {
                index: closed.opener.index(),
                reason: "recorded generic opener is not `<`",
            });
        }
        self.tokens.replace(closed.opener, Token::operator("<"))?;
        Ok(closed)
    }
}
