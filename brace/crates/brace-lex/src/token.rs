//! Token definitions.
//!
//! A token is a kind plus the exact source text it covers. Every character
//! of the input lands in exactly one token, so joining the texts of a token
//! stream gives back the source.

use std::fmt;

use brace_util::define_idx;

define_idx!(
    /// Position of a token in the lexer's output.
    pub TokenIdx
);

/// Kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Number,
    Linebreak,
    StartOfScope,
    EndOfScope,
    Operator,
    StringBody,
    Identifier,
    Whitespace,
    CommentBody,
}

impl TokenKind {
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Number,
        TokenKind::Linebreak,
        TokenKind::StartOfScope,
        TokenKind::EndOfScope,
        TokenKind::Operator,
        TokenKind::StringBody,
        TokenKind::Identifier,
        TokenKind::Whitespace,
        TokenKind::CommentBody,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Number => "Number",
            TokenKind::Linebreak => "Linebreak",
            TokenKind::StartOfScope => "StartOfScope",
            TokenKind::EndOfScope => "EndOfScope",
            TokenKind::Operator => "Operator",
            TokenKind::StringBody => "StringBody",
            TokenKind::Identifier => "Identifier",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::CommentBody => "CommentBody",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, text)
    }

    pub fn linebreak(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Linebreak, text)
    }

    pub fn start_of_scope(text: impl Into<String>) -> Self {
        Self::new(TokenKind::StartOfScope, text)
    }

    pub fn end_of_scope(text: impl Into<String>) -> Self {
        Self::new(TokenKind::EndOfScope, text)
    }

    pub fn operator(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Operator, text)
    }

    pub fn string_body(text: impl Into<String>) -> Self {
        Self::new(TokenKind::StringBody, text)
    }

    pub fn identifier(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, text)
    }

    pub fn whitespace(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Whitespace, text)
    }

    pub fn comment_body(text: impl Into<String>) -> Self {
        Self::new(TokenKind::CommentBody, text)
    }

    /// True when both kind and text match.
    #[inline]
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    /// Whitespace, comment bodies and the comment delimiters `//`, `/*`
    /// and `*/`.
    pub fn is_whitespace_or_comment(&self) -> bool {
        match self.kind {
            TokenKind::Whitespace | TokenKind::CommentBody => true,
            TokenKind::StartOfScope => self.text == "//" || self.text == "/*",
            TokenKind::EndOfScope => self.text == "*/",
            _ => false,
        }
    }

    pub fn is_whitespace_or_comment_or_linebreak(&self) -> bool {
        self.kind == TokenKind::Linebreak || self.is_whitespace_or_comment()
    }

    /// Whether this token ends the scope opened by `opener`.
    ///
    /// Pairs are `( )`, `[ ]`, `{ }`, `" "`, `/* */`, `#if #endif` and
    /// `// <linebreak>`. A `<` opener is closed by any `EndOfScope` or
    /// `Operator` whose text starts with `>`, since the closing angle may
    /// still be glued to a following operator (`>>`, `>=`).
    ///
    /// ```
    /// use brace_lex::Token;
    ///
    /// let paren = Token::start_of_scope("(");
    /// assert!(Token::end_of_scope(")").closes_scope_for_token(&paren));
    /// assert!(!Token::end_of_scope("]").closes_scope_for_token(&paren));
    ///
    /// let angle = Token::start_of_scope("<");
    /// assert!(Token::operator(">>").closes_scope_for_token(&angle));
    /// ```
    pub fn closes_scope_for_token(&self, opener: &Token) -> bool {
        if opener.kind != TokenKind::StartOfScope {
            return false;
        }
        match self.kind {
            TokenKind::Linebreak => opener.text == "//",
            TokenKind::Operator => opener.text == "<" && self.text.starts_with('>'),
            TokenKind::EndOfScope => match opener.text.as_str() {
                "(" => self.text == ")",
                "[" => self.text == "]",
                "{" => self.text == "}",
                "\"" => self.text == "\"",
                "/*" => self.text == "*/",
                "#if" => self.text == "#endif",
                "<" => self.text.starts_with('>'),
                _ => false,
            },
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Token::operator("<"), Token::new(TokenKind::Operator, "<"));
        assert_ne!(Token::operator("<"), Token::start_of_scope("<"));
    }

    #[test]
    fn test_whitespace_or_comment() {
        assert!(Token::whitespace(" ").is_whitespace_or_comment());
        assert!(Token::comment_body("x").is_whitespace_or_comment());
        assert!(Token::start_of_scope("//").is_whitespace_or_comment());
        assert!(Token::start_of_scope("/*").is_whitespace_or_comment());
        assert!(Token::end_of_scope("*/").is_whitespace_or_comment());
        assert!(!Token::start_of_scope("(").is_whitespace_or_comment());
        assert!(!Token::linebreak("\n").is_whitespace_or_comment());
        assert!(Token::linebreak("\n").is_whitespace_or_comment_or_linebreak());
        assert!(!Token::identifier("x").is_whitespace_or_comment_or_linebreak());
    }

    #[test]
    fn test_pairing_table() {
        let pairs = [("(", ")"), ("[", "]"), ("{", "}"), ("\"", "\""), ("/*", "*/"), ("#if", "#endif")];
        for (open, close) in pairs {
            let opener = Token::start_of_scope(open);
            assert!(Token::end_of_scope(close).closes_scope_for_token(&opener), "{open} {close}");
            for (_, other) in pairs.iter().filter(|(o, _)| *o != open) {
                assert!(!Token::end_of_scope(*other).closes_scope_for_token(&opener));
            }
        }
    }

    #[test]
    fn test_line_comment_closed_by_linebreak() {
        let opener = Token::start_of_scope("//");
        assert!(Token::linebreak("\r\n").closes_scope_for_token(&opener));
        assert!(!Token::linebreak("\n").closes_scope_for_token(&Token::start_of_scope("/*")));
    }

    #[test]
    fn test_angle_closers() {
        let opener = Token::start_of_scope("<");
        assert!(Token::end_of_scope(">").closes_scope_for_token(&opener));
        assert!(Token::operator(">").closes_scope_for_token(&opener));
        assert!(Token::operator(">=").closes_scope_for_token(&opener));
        assert!(!Token::operator("?>").closes_scope_for_token(&opener));
        // a tentative opener is an operator, and operators open nothing
        assert!(!Token::operator(">").closes_scope_for_token(&Token::operator("<")));
    }

    #[test]
    fn test_bodies_close_nothing() {
        let quote = Token::start_of_scope("\"");
        assert!(!Token::string_body("\"").closes_scope_for_token(&quote));
        assert!(!Token::comment_body("*/").closes_scope_for_token(&Token::start_of_scope("/*")));
    }

    #[test]
    fn test_display_is_text() {
        assert_eq!(Token::string_body("a b").to_string(), "a b");
        assert_eq!(TokenKind::StartOfScope.to_string(), "StartOfScope");
    }
}
