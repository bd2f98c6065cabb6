//! Character cursor for traversing source code.
//!
//! The cursor owns the read position and the line/column bookkeeping. Every
//! `match_*` operation either consumes what it reports or leaves the cursor
//! untouched, so classifiers can look ahead freely without saving state. The
//! exceptions are the multi-step lookaheads (exponent markers,
//! backtick identifiers), which use [`Cursor::snapshot`] and
//! [`Cursor::restore`].

/// A position in the source that can be returned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub position: usize,
    pub line: u32,
    pub column: u32,
}

/// Cursor over a source string.
///
/// Lines end at `\r\n`, a lone `\r`, or `\n`. Columns count characters and
/// are 1-based.
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The character `n` places ahead; `peek_nth(0)` is [`Cursor::peek`].
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    #[inline]
    pub fn starts_with(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Consumes one character and updates line/column.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        match c {
            '\n' => self.new_line(),
            // `\r\n` ends the line at the `\n`
            '\r' if self.peek() == Some('\n') => self.column += 1,
            '\r' => self.new_line(),
            _ => self.column += 1,
        }
        Some(c)
    }

    #[inline]
    fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Consumes exactly one character if it satisfies `predicate`.
    pub fn match_one(&mut self, predicate: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if predicate(c) => self.advance(),
            _ => None,
        }
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        self.match_one(|c| c == expected).is_some()
    }

    /// Consumes `literal` if the remaining input starts with it.
    pub fn match_literal(&mut self, literal: &str) -> Option<&'a str> {
        if literal.is_empty() || !self.starts_with(literal) {
            return None;
        }
        let start = self.position;
        for _ in literal.chars() {
            self.advance();
        }
        Some(self.slice_from(start))
    }

    /// Consumes the longest non-empty run of characters satisfying
    /// `predicate`.
    pub fn match_run(&mut self, predicate: impl Fn(char) -> bool) -> Option<&'a str> {
        let start = self.position;
        while self.match_one(&predicate).is_some() {}
        if self.position == start {
            None
        } else {
            Some(self.slice_from(start))
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Source text between two byte offsets, if they are valid boundaries.
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a str> {
        self.source.get(start..end)
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or_default()
    }

    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or_default()
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let x");
        assert_eq!(cursor.peek(), Some('l'));
        assert_eq!(cursor.peek_nth(4), Some('x'));
        assert_eq!(cursor.peek_nth(5), None);
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
    }

    #[test]
    fn test_match_one_leaves_cursor_on_failure() {
        let mut cursor = Cursor::new("a1");
        assert_eq!(cursor.match_one(|c| c.is_ascii_digit()), None);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.match_one(|c| c.is_alphabetic()), Some('a'));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_match_literal() {
        let mut cursor = Cursor::new("/*x");
        assert_eq!(cursor.match_literal("//"), None);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.match_literal("/*"), Some("/*"));
        assert_eq!(cursor.remaining(), "x");
        assert_eq!(cursor.match_literal(""), None);
    }

    #[test]
    fn test_match_run_requires_one_char() {
        let mut cursor = Cursor::new("  \tx");
        assert_eq!(cursor.match_run(|c| c == 'x'), None);
        assert_eq!(cursor.match_run(|c| c == ' ' || c == '\t'), Some("  \t"));
        assert_eq!(cursor.column(), 4);
    }

    #[test]
    fn test_multibyte_advance() {
        let mut cursor = Cursor::new("é→a");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.advance(), Some('→'));
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.column(), 3);
        assert_eq!(cursor.slice_from(0), "é→");
    }

    #[test]
    fn test_line_tracking_all_terminators() {
        let mut cursor = Cursor::new("a\nb\r\nc\rd");
        while cursor.peek() != Some('d') {
            cursor.advance();
        }
        assert_eq!((cursor.line(), cursor.column()), (4, 1));
    }

    #[test]
    fn test_crlf_is_one_line() {
        let mut cursor = Cursor::new("\r\nx");
        cursor.advance();
        assert_eq!(cursor.line(), 1);
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn test_snapshot_restore() {
        let mut cursor = Cursor::new("1e+x");
        cursor.advance();
        let snapshot = cursor.snapshot();
        cursor.advance();
        cursor.advance();
        cursor.restore(snapshot);
        assert_eq!(cursor.remaining(), "e+x");
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_end_of_input() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.remaining(), "");
        assert_eq!(cursor.slice(0, 0), Some(""));
    }
}
