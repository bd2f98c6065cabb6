//! Number literal lexing.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or decimal literal.
    ///
    /// A fraction is only taken when a digit follows the `.`, and an
    /// exponent only when digits follow the marker; otherwise those
    /// characters are left for the next token (`1.` is `1` `.`, `1e` is
    /// `1` `e`). Radix literals (`0x`, `0o`, `0b`) need at least one digit
    /// of their radix after the prefix.
    pub(super) fn lex_number(&mut self) -> Option<Token> {
        let start = self.cursor.position();
        if !self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
        if self.lex_radix_literal() {
            return Some(Token::number(self.cursor.slice_from(start)));
        }

        self.lex_digits(|c| c.is_ascii_digit());

        if self.cursor.peek() == Some('.') && self.cursor.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
            self.lex_digits(|c| c.is_ascii_digit());
        }

        let before_exponent = self.cursor.snapshot();
        if self.cursor.match_one(|c| c == 'e' || c == 'E').is_some() {
            self.cursor.match_one(|c| c == '+' || c == '-');
            if !self.lex_digits(|c| c.is_ascii_digit()) {
                self.cursor.restore(before_exponent);
            }
        }

        Some(Token::number(self.cursor.slice_from(start)))
    }

    fn lex_radix_literal(&mut self) -> bool {
        let is_digit: fn(char) -> bool = match self.cursor.remaining().get(..2) {
            Some("0x") => |c| c.is_ascii_hexdigit(),
            Some("0o") => |c| c.is_digit(8),
            Some("0b") => |c| c == '0' || c == '1',
            _ => return false,
        };
        let snapshot = self.cursor.snapshot();
        self.cursor.advance();
        self.cursor.advance();
        if self.lex_digits(is_digit) {
            true
        } else {
            self.cursor.restore(snapshot);
            false
        }
    }

    /// A digit followed by digits and `_` separators.
    fn lex_digits(&mut self, is_digit: impl Fn(char) -> bool) -> bool {
        if self.cursor.match_one(&is_digit).is_none() {
            return false;
        }
        self.cursor.match_run(|c| c == '_' || is_digit(c));
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::token::Token;
    use crate::Lexer;

    fn lex_num(source: &str) -> Option<Token> {
        Lexer::new(source).lex_number()
    }

    #[test]
    fn test_integer() {
        assert_eq!(lex_num("42;"), Some(Token::number("42")));
        assert_eq!(lex_num("1_000_000"), Some(Token::number("1_000_000")));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(lex_num("3.14"), Some(Token::number("3.14")));
        assert_eq!(lex_num("1.5.2"), Some(Token::number("1.5")));
    }

    #[test]
    fn test_dot_without_digit_is_left() {
        assert_eq!(lex_num("1."), Some(Token::number("1")));
        assert_eq!(lex_num("1.foo"), Some(Token::number("1")));
        assert_eq!(lex_num("1..<5"), Some(Token::number("1")));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(lex_num("1e10"), Some(Token::number("1e10")));
        assert_eq!(lex_num("2.5E-3"), Some(Token::number("2.5E-3")));
        assert_eq!(lex_num("6e+2x"), Some(Token::number("6e+2")));
    }

    #[test]
    fn test_exponent_backtracks() {
        let mut lexer = Lexer::new("1e");
        assert_eq!(lexer.lex_number(), Some(Token::number("1")));
        assert_eq!(lexer.cursor.remaining(), "e");

        let mut lexer = Lexer::new("1e+");
        assert_eq!(lexer.lex_number(), Some(Token::number("1")));
        assert_eq!(lexer.cursor.remaining(), "e+");
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(lex_num("0xFF_FF"), Some(Token::number("0xFF_FF")));
        assert_eq!(lex_num("0o17"), Some(Token::number("0o17")));
        assert_eq!(lex_num("0b1010 "), Some(Token::number("0b1010")));
    }

    #[test]
    fn test_radix_prefix_without_digits() {
        assert_eq!(lex_num("0x"), Some(Token::number("0")));
        assert_eq!(lex_num("0b2"), Some(Token::number("0")));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(lex_num("x1"), None);
        assert_eq!(lex_num(".5"), None);
        assert_eq!(lex_num("_1"), None);
    }
}
