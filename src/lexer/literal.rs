//! String, character, raw string and escape sequence scanning.

use super::cursor::{Lexeme, Scan};
use super::state::ScanMode;
use super::token::TokenKind;

const RAW_PREFIXES: [&str; 5] = ["u8R\"", "LR\"", "uR\"", "UR\"", "R\""];
const STRING_PREFIXES: [&str; 4] = ["u8\"", "L\"", "u\"", "U\""];

/// Characters that may follow `\` to form an escape sequence.
pub(crate) fn is_escape_introducer(c: char) -> bool {
    matches!(
        c,
        '\'' | '"' | '\\' | '?' | 'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '0'..='9' | 'x' | 'u' | 'U'
    )
}

/// Try a prefixed string or raw string literal at the cursor.
pub(crate) fn prefixed_literal(s: &mut Scan<'_, '_>) -> Option<Lexeme> {
    if let Some(prefix) = RAW_PREFIXES.iter().find(|p| s.cursor.starts_with(p)) {
        s.cursor.bump_n(prefix.len());
        s.state.mode = ScanMode::RawString;
        return Some(raw_string(s));
    }
    if let Some(prefix) = STRING_PREFIXES.iter().find(|p| s.cursor.starts_with(p)) {
        // prefix letters are ASCII; leave the quote for `string_start`
        s.cursor.bump_n(prefix.len() - 1);
        return Some(string_start(s));
    }
    None
}

/// A string or char literal inside assembly, scanned to its closing quote
/// or the end of the line without leaving the assembly mode.
pub(crate) fn asm_literal(s: &mut Scan<'_, '_>) -> Option<Lexeme> {
    let quote = s.cursor.first().filter(|c| matches!(c, '"' | '\''))?;
    s.cursor.bump();
    while let Some(c) = s.cursor.bump() {
        match c {
            '\\' => {
                s.cursor.bump();
            }
            c if c == quote => break,
            _ => {}
        }
    }
    let kind = if quote == '"' {
        TokenKind::String
    } else {
        TokenKind::Char
    };
    Some(Lexeme::new(kind))
}

/// Entered on `"`.
pub(crate) fn string_start(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.bump();
    s.state.mode = ScanMode::String;
    string_body(s)
}

/// Scan string contents up to the closing quote, an escape sequence, a
/// trailing backslash, or the end of the line.
pub(crate) fn string_body(s: &mut Scan<'_, '_>) -> Lexeme {
    let multi_line = s.state.mode == ScanMode::MultiLineString;
    while let Some(c) = s.cursor.first() {
        match c {
            '"' => {
                s.cursor.bump();
                s.state.mode = ScanMode::Default;
                return Lexeme::new(TokenKind::String);
            }
            '\\' => match s.cursor.second() {
                None => {
                    s.cursor.bump();
                    s.state.mode = ScanMode::MultiLineString;
                    return Lexeme::new(TokenKind::String);
                }
                Some(next) if is_escape_introducer(next) => {
                    s.state.mode = if multi_line {
                        ScanMode::MultiLineStringEscape
                    } else {
                        ScanMode::StringEscape
                    };
                    return Lexeme::new(TokenKind::String);
                }
                Some(_) => {}
            },
            _ => {}
        }
        s.cursor.bump();
    }
    // unterminated on this line
    s.state.mode = ScanMode::Default;
    Lexeme::new(TokenKind::String)
}

/// Entered with the cursor on the `\` of an escape sequence.
pub(crate) fn escape_sequence(s: &mut Scan<'_, '_>) -> Lexeme {
    let resume = if s.state.mode == ScanMode::MultiLineStringEscape {
        ScanMode::MultiLineString
    } else {
        ScanMode::String
    };
    let kind = escape_payload(s);
    s.state.mode = if s.cursor.is_eol() {
        ScanMode::Default
    } else {
        resume
    };
    Lexeme::new(kind)
}

fn escape_payload(s: &mut Scan<'_, '_>) -> TokenKind {
    let cur = &mut s.cursor;
    cur.bump();
    match cur.first() {
        Some('\'' | '"' | '?' | 'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\') => {
            cur.bump();
        }
        Some('0'..='7') => {
            for _ in 0..3 {
                if !matches!(cur.first(), Some('0'..='7')) {
                    break;
                }
                cur.bump();
            }
        }
        Some('8' | '9') => {
            cur.bump();
            return TokenKind::Unknown;
        }
        Some('x') => {
            cur.bump();
            if cur.eat_while(|c| c.is_ascii_hexdigit()) == 0 {
                return TokenKind::Unknown;
            }
        }
        Some(marker @ ('u' | 'U')) => {
            cur.bump();
            let digits = if marker == 'u' { 4 } else { 8 };
            // payload digits are checked against 0-7, not the hex range
            for _ in 0..digits {
                if !matches!(cur.first(), Some('0'..='7')) {
                    return TokenKind::Unknown;
                }
                cur.bump();
            }
        }
        _ => {}
    }
    TokenKind::StringEscape
}

/// Raw string body. Quotes inside `( )` do not terminate the literal.
pub(crate) fn raw_string(s: &mut Scan<'_, '_>) -> Lexeme {
    let mut in_parens = s.state.mode == ScanMode::RawStringInParens;
    while let Some(c) = s.cursor.bump() {
        match c {
            '"' if !in_parens => {
                s.state.mode = ScanMode::Default;
                return Lexeme::new(TokenKind::RawString);
            }
            '(' => in_parens = true,
            ')' => in_parens = false,
            _ => {}
        }
    }
    s.state.mode = if in_parens {
        ScanMode::RawStringInParens
    } else {
        ScanMode::RawString
    };
    Lexeme::new(TokenKind::RawString)
}

/// Entered on `'`.
pub(crate) fn char_start(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.bump();
    char_body(s)
}

/// Character literal contents, also used to resume after a trailing `\`.
pub(crate) fn char_body(s: &mut Scan<'_, '_>) -> Lexeme {
    while let Some(c) = s.cursor.first() {
        match c {
            '\'' => {
                s.cursor.bump();
                s.state.mode = ScanMode::Default;
                return Lexeme::new(TokenKind::Char);
            }
            '\\' if s.cursor.second().is_none() => {
                s.cursor.bump();
                s.state.mode = ScanMode::Char;
                return Lexeme::new(TokenKind::Char);
            }
            '\\' => s.cursor.bump_n(2),
            _ => {
                s.cursor.bump();
            }
        }
    }
    s.state.mode = ScanMode::Default;
    Lexeme::new(TokenKind::Char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::LineState;
    use crate::lexer::cursor::Handler;
    use rstest::rstest;

    fn prefixed(s: &mut Scan<'_, '_>) -> Lexeme {
        prefixed_literal(s).unwrap()
    }

    fn run(handler: Handler, text: &str, mode: ScanMode) -> (TokenKind, usize, ScanMode) {
        let mut state = LineState {
            mode,
            ..LineState::default()
        };
        let mut scan = Scan::new(text, 0, &mut state);
        let lexeme = handler(&mut scan);
        let end = scan.cursor.pos();
        (lexeme.kind, end, state.mode)
    }

    #[test]
    fn test_string_stops_before_escape() {
        let (kind, end, mode) = run(string_start, r#""ab\ncd""#, ScanMode::Default);
        assert_eq!((kind, end, mode), (TokenKind::String, 3, ScanMode::StringEscape));
    }

    #[test]
    fn test_trailing_backslash_continues_string() {
        let (_, end, mode) = run(string_start, r#""abc\"#, ScanMode::Default);
        assert_eq!((end, mode), (5, ScanMode::MultiLineString));
    }

    #[test]
    fn test_unknown_escape_is_part_of_string() {
        let (_, end, mode) = run(string_start, r#""a\qb" x"#, ScanMode::Default);
        assert_eq!((end, mode), (6, ScanMode::Default));
    }

    #[rstest]
    #[case(r"\n", TokenKind::StringEscape, 2)]
    #[case(r"\0123", TokenKind::StringEscape, 4)]
    #[case(r"\x1fg", TokenKind::StringEscape, 4)]
    #[case(r"\xg", TokenKind::Unknown, 2)]
    #[case(r"\9", TokenKind::Unknown, 2)]
    #[case(r"\u0123z", TokenKind::StringEscape, 6)]
    #[case(r"\u00e9", TokenKind::Unknown, 4)]
    #[case(r"\U00000001", TokenKind::StringEscape, 10)]
    fn test_escape_payload(#[case] text: &str, #[case] kind: TokenKind, #[case] len: usize) {
        let (got, end, _) = run(escape_sequence, text, ScanMode::StringEscape);
        assert_eq!((got, end), (kind, len));
    }

    #[test]
    fn test_escape_resumes_string_mode() {
        let (_, _, mode) = run(escape_sequence, r#"\tx""#, ScanMode::MultiLineStringEscape);
        assert_eq!(mode, ScanMode::MultiLineString);
        let (_, _, mode) = run(escape_sequence, r"\t", ScanMode::MultiLineStringEscape);
        assert_eq!(mode, ScanMode::Default);
    }

    #[rstest]
    #[case(r#"R"(a"b)" rest"#, 8, ScanMode::Default)]
    #[case(r#"u8R"x(y"#, 7, ScanMode::RawStringInParens)]
    #[case(r#"LR"abc"#, 6, ScanMode::RawString)]
    fn test_raw_strings(#[case] text: &str, #[case] end: usize, #[case] mode: ScanMode) {
        let (kind, got_end, got_mode) = run(prefixed, text, ScanMode::Default);
        assert_eq!((kind, got_end, got_mode), (TokenKind::RawString, end, mode));
    }

    #[test]
    fn test_raw_string_resumes_inside_parens() {
        let (_, end, mode) = run(raw_string, r#"")" tail"#, ScanMode::RawStringInParens);
        assert_eq!((end, mode), (3, ScanMode::Default));
    }

    #[test]
    fn test_wide_string_prefix() {
        let (kind, end, _) = run(prefixed, r#"L"wide" x"#, ScanMode::Default);
        assert_eq!((kind, end), (TokenKind::String, 7));
        let mut state = LineState::default();
        let mut scan = Scan::new("Lx", 0, &mut state);
        assert!(prefixed_literal(&mut scan).is_none());
    }

    #[rstest]
    #[case(r"'a' b", 3, ScanMode::Default)]
    #[case(r"'\'' b", 4, ScanMode::Default)]
    #[case(r"'ab", 3, ScanMode::Default)]
    #[case(r"'\", 2, ScanMode::Char)]
    fn test_char_literals(#[case] text: &str, #[case] end: usize, #[case] mode: ScanMode) {
        let (kind, got_end, got_mode) = run(char_start, text, ScanMode::Default);
        assert_eq!((kind, got_end, got_mode), (TokenKind::Char, end, mode));
    }
}
