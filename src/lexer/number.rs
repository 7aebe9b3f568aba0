//! Numeric literal scanning.
//!
//! The whole literal is consumed as one token. Malformed shapes (repeated
//! suffixes, stray radix letters, `8`/`9` in an octal literal) classify the
//! token as [`TokenKind::Unknown`] without ending it early; only a second
//! decimal point, a dangling exponent sign, or a bad `x` abort the scan.

use super::cursor::{Lexeme, Scan};
use super::token::TokenKind;

fn is_suffix_l(c: Option<char>) -> bool {
    matches!(c, Some('l' | 'L'))
}

fn is_suffix_f(c: Option<char>) -> bool {
    matches!(c, Some('f' | 'F'))
}

fn is_exponent(c: Option<char>) -> bool {
    matches!(c, Some('e' | 'E'))
}

/// Entered on a digit, or on `.` followed by a digit.
pub(crate) fn number(s: &mut Scan<'_, '_>) -> Lexeme {
    let cur = &mut s.cursor;
    let start = cur.pos();
    let leading_zero = cur.first() == Some('0');
    let mut kind = if cur.first() == Some('.') {
        TokenKind::Float
    } else {
        TokenKind::Number
    };
    cur.bump();

    let mut invalid = false;
    let mut bad_octal = false;
    let mut seen_exponent = false;
    let mut seen_f = false;
    let mut seen_u = false;
    let mut l_count = 0u8;

    while let Some(c) = cur.first() {
        match c {
            '\'' => {
                let separates = matches!(kind, TokenKind::Number | TokenKind::Octal | TokenKind::Hex)
                    && cur.second().is_some_and(|n| n.is_ascii_hexdigit());
                if !separates {
                    break;
                }
            }
            '.' => {
                if cur.second() == Some('.') {
                    cur.bump_n(2);
                    return Lexeme::new(TokenKind::Unknown);
                }
                if matches!(kind, TokenKind::Float | TokenKind::Hex) {
                    cur.bump();
                    return Lexeme::new(TokenKind::Unknown);
                }
                kind = TokenKind::Float;
            }
            '+' | '-' => {
                if kind != TokenKind::Float || !is_exponent(cur.prev()) {
                    break;
                }
                if !cur.second().is_some_and(|n| n.is_ascii_digit()) {
                    cur.bump();
                    return Lexeme::new(TokenKind::Unknown);
                }
            }
            '0'..='7' => {
                if leading_zero && cur.pos() == start + 1 {
                    kind = TokenKind::Octal;
                }
            }
            '8' | '9' => {
                if leading_zero && !matches!(kind, TokenKind::Hex | TokenKind::Float) {
                    bad_octal = true;
                }
            }
            'a'..='d' | 'A'..='D' => {
                if kind != TokenKind::Hex {
                    invalid = true;
                }
            }
            'e' | 'E' => {
                if kind != TokenKind::Hex {
                    if seen_exponent {
                        invalid = true;
                    } else if matches!(cur.second(), Some('+' | '-' | '0'..='9')) {
                        seen_exponent = true;
                        kind = TokenKind::Float;
                    } else {
                        break;
                    }
                }
            }
            'f' | 'F' => {
                if kind != TokenKind::Hex {
                    if seen_f || (kind == TokenKind::Float && is_suffix_l(cur.prev())) {
                        invalid = true;
                    }
                    seen_f = true;
                    kind = TokenKind::Float;
                }
            }
            'l' | 'L' => {
                if l_count >= 2 || (l_count == 1 && !is_suffix_l(cur.prev())) {
                    invalid = true;
                }
                if kind == TokenKind::Float && is_suffix_f(cur.prev()) {
                    invalid = true;
                }
                l_count = l_count.saturating_add(1);
            }
            'u' | 'U' => {
                if kind == TokenKind::Float || seen_u {
                    invalid = true;
                }
                seen_u = true;
            }
            'x' | 'X' => {
                let radix_prefix = leading_zero
                    && cur.pos() == start + 1
                    && cur.second().is_some_and(|n| n.is_ascii_hexdigit());
                if !radix_prefix {
                    cur.bump();
                    return Lexeme::new(TokenKind::Unknown);
                }
                kind = TokenKind::Hex;
            }
            _ => break,
        }
        cur.bump();
    }

    if invalid || (bad_octal && matches!(kind, TokenKind::Number | TokenKind::Octal)) {
        kind = TokenKind::Unknown;
    }
    Lexeme::new(kind)
}
