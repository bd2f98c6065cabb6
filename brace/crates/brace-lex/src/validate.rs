//! Checks over a finished token stream.
//!
//! These do not influence lexing. They let callers (and tests) confirm the
//! two guarantees consumers depend on: the stream reproduces the source,
//! and scope delimiters pair up.

use crate::token::{Token, TokenKind};

/// A scope delimiter without a partner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeIssue {
    /// The `StartOfScope` at `index` is never closed.
    Unclosed { index: usize },
    /// The `EndOfScope` at `index` closes no open scope.
    Unmatched { index: usize },
}

impl ScopeIssue {
    pub fn index(&self) -> usize {
        match *self {
            ScopeIssue::Unclosed { index } | ScopeIssue::Unmatched { index } => index,
        }
    }
}

/// Concatenates the token texts.
pub fn reconstruct(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

pub fn is_lossless(source: &str, tokens: &[Token]) -> bool {
    let mut rest = source;
    for token in tokens {
        match rest.strip_prefix(token.text.as_str()) {
            Some(tail) => rest = tail,
            None => return false,
        }
    }
    rest.is_empty()
}

/// Pairs every `StartOfScope` with its `EndOfScope` and reports the ones
/// left over. `//` needs no closer. An empty result means every scope is
/// closed, in order.
///
/// ```
/// use brace_lex::validate::{scope_issues, ScopeIssue};
///
/// let tokens = brace_lex::tokenize("f(a[0)").unwrap();
/// assert_eq!(
///     scope_issues(&tokens),
///     vec![
///         ScopeIssue::Unmatched { index: 5 },
///         ScopeIssue::Unclosed { index: 3 },
///         ScopeIssue::Unclosed { index: 1 },
///     ]
/// );
/// ```
pub fn scope_issues(tokens: &[Token]) -> Vec<ScopeIssue> {
    let mut open: Vec<usize> = Vec::new();
    let mut issues = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::StartOfScope if token.text == "//" => {},
            TokenKind::StartOfScope => open.push(index),
            TokenKind::EndOfScope => {
                let closes_top = open
                    .last()
                    .is_some_and(|&opener| token.closes_scope_for_token(&tokens[opener]));
                if closes_top {
                    open.pop();
                } else {
                    issues.push(ScopeIssue::Unmatched { index });
                }
            },
            _ => {},
        }
    }
    issues.extend(open.into_iter().rev().map(|index| ScopeIssue::Unclosed { index }));
    issues
}
