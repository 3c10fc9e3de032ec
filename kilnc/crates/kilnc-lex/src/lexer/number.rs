//! Number literal lexing.
//!
//! Literals are plain decimal digit runs with at most one interior point.
//! There are no exponents, digit separators, or radix prefixes.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or float literal starting at a decimal digit.
    ///
    /// A `.` is absorbed only when a digit follows it and no point has been
    /// seen yet. `1..5` therefore stops before the range operator and `1.`
    /// stops before the dot.
    pub fn lex_number(&mut self) -> TokenKind {
        let mut has_point = false;

        while let Some(b) = self.cursor.current() {
            if b.is_ascii_digit() {
                self.cursor.advance();
            } else if b == b'.' {
                if has_point || self.cursor.peek_is(1, b'.') {
                    break;
                }
                match self.cursor.peek(1) {
                    Some(next) if next.is_ascii_digit() => {
                        self.cursor.advance();
                        has_point = true;
                    },
                    _ => break,
                }
            } else {
                break;
            }
        }

        if has_point {
            TokenKind::Float
        } else {
            TokenKind::Integer
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    fn lex(source: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(source.as_bytes())
            .map(|t| (t.kind, t.text_lossy().into_owned()))
            .collect()
    }

    fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn test_decimal_integer() {
        assert_eq!(lex("42"), vec![tok(TokenKind::Integer, "42")]);
        assert_eq!(lex("0"), vec![tok(TokenKind::Integer, "0")]);
        assert_eq!(lex("007"), vec![tok(TokenKind::Integer, "007")]);
    }

    #[test]
    fn test_float() {
        assert_eq!(lex("1.5"), vec![tok(TokenKind::Float, "1.5")]);
        assert_eq!(lex("3.14159"), vec![tok(TokenKind::Float, "3.14159")]);
    }

    #[test]
    fn test_range_is_not_a_decimal_point() {
        assert_eq!(
            lex("1..5"),
            vec![
                tok(TokenKind::Integer, "1"),
                tok(TokenKind::ExclusiveRange, ".."),
                tok(TokenKind::Integer, "5"),
            ]
        );
        assert_eq!(
            lex("0...10"),
            vec![
                tok(TokenKind::Integer, "0"),
                tok(TokenKind::InclusiveRange, "..."),
                tok(TokenKind::Integer, "10"),
            ]
        );
    }

    #[test]
    fn test_float_then_range() {
        assert_eq!(
            lex("1.5..2"),
            vec![
                tok(TokenKind::Float, "1.5"),
                tok(TokenKind::ExclusiveRange, ".."),
                tok(TokenKind::Integer, "2"),
            ]
        );
    }

    #[test]
    fn test_trailing_dot_is_left_alone() {
        assert_eq!(
            lex("1."),
            vec![tok(TokenKind::Integer, "1"), tok(TokenKind::Dot, ".")]
        );
        assert_eq!(
            lex("1.x"),
            vec![
                tok(TokenKind::Integer, "1"),
                tok(TokenKind::Dot, "."),
                tok(TokenKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_second_point_ends_literal() {
        assert_eq!(
            lex("1.2.3"),
            vec![
                tok(TokenKind::Float, "1.2"),
                tok(TokenKind::Dot, "."),
                tok(TokenKind::Integer, "3"),
            ]
        );
    }

    #[test]
    fn test_no_exponent_or_radix() {
        assert_eq!(
            lex("1e10"),
            vec![tok(TokenKind::Integer, "1"), tok(TokenKind::Identifier, "e10")]
        );
        assert_eq!(
            lex("0xFF"),
            vec![tok(TokenKind::Integer, "0"), tok(TokenKind::Identifier, "xFF")]
        );
        assert_eq!(
            lex("1_000"),
            vec![tok(TokenKind::Integer, "1"), tok(TokenKind::Identifier, "_000")]
        );
    }

    #[test]
    fn test_leading_dot_is_not_a_float() {
        assert_eq!(
            lex(".5"),
            vec![tok(TokenKind::Dot, "."), tok(TokenKind::Integer, "5")]
        );
    }
}
