//! Operators, punctuation and nesting bookkeeping.

use super::comment;
use super::cursor::{Lexeme, Scan};
use super::number;
use super::state::{IndentKind, ScanMode};
use super::token::{SymbolKind, TokenKind};

/// Longest-first match over the multi-char spellings starting at the cursor.
fn operator(s: &mut Scan<'_, '_>, longer: &[(&str, SymbolKind)], single: SymbolKind) -> Lexeme {
    for &(text, symbol) in longer {
        if s.cursor.starts_with(text) {
            s.cursor.bump_n(text.len());
            return Lexeme::symbol(symbol);
        }
    }
    s.cursor.bump();
    Lexeme::symbol(single)
}

pub(crate) fn ampersand(s: &mut Scan<'_, '_>) -> Lexeme {
    use SymbolKind::*;
    operator(s, &[("&&", LogAnd), ("&=", AndAssign)], BitAnd)
}

pub(crate) fn equal(s: &mut Scan<'_, '_>) -> Lexeme {
    operator(s, &[("==", SymbolKind::LogEqual)], SymbolKind::Assign)
}

pub(crate) fn colon(s: &mut Scan<'_, '_>) -> Lexeme {
    operator(s, &[("::", SymbolKind::ScopeResolution)], SymbolKind::Colon)
}

pub(crate) fn comma(s: &mut Scan<'_, '_>) -> Lexeme {
    operator(s, &[], SymbolKind::Comma)
}

pub(crate) fn greater(s: &mut Scan<'_, '_>) -> Lexeme {
    use SymbolKind::*;
    operator(
        s,
        &[(">>=", ShiftRightAssign), (">>", ShiftRight), (">=", GreaterThanEqual)],
        GreaterThan,
    )
}

pub(crate) fn less(s: &mut Scan<'_, '_>) -> Lexeme {
    use SymbolKind::*;
    operator(
        s,
        &[("<<=", ShiftLeftAssign), ("<<", ShiftLeft), ("<=", LessThanEqual)],
        LessThan,
    )
}

pub(crate) fn minus(s: &mut Scan<'_, '_>) -> Lexeme {
    use SymbolKind::*;
    operator(
        s,
        &[
            ("->*", PointerToMemberOfPointer),
            ("->", Arrow),
            ("--", Decrement),
            ("-=", SubtractAssign),
        ],
        Subtract,
    )
}

pub(crate) fn percent(s: &mut Scan<'_, '_>) -> Lexeme {
    operator(s, &[("%=", SymbolKind::ModAssign)], SymbolKind::Mod)
}

pub(crate) fn bang(s: &mut Scan<'_, '_>) -> Lexeme {
    operator(s, &[("!=", SymbolKind::NotEqual)], SymbolKind::LogComplement)
}

pub(crate) fn pipe(s: &mut Scan<'_, '_>) -> Lexeme {
    use SymbolKind::*;
    operator(s, &[("||", LogOr), ("|=", OrAssign)], BitOr)
}

pub(crate) fn plus(s: &mut Scan<'_, '_>) -> Lexeme {
    use SymbolKind::*;
    operator(s, &[("++", Increment), ("+=", AddAssign)], Add)
}

pub(crate) fn question(s: &mut Scan<'_, '_>) -> Lexeme {
    operator(s, &[], SymbolKind::Question)
}

pub(crate) fn star(s: &mut Scan<'_, '_>) -> Lexeme {
    operator(s, &[("*=", SymbolKind::MultiplyAssign)], SymbolKind::Star)
}

pub(crate) fn caret(s: &mut Scan<'_, '_>) -> Lexeme {
    operator(s, &[("^=", SymbolKind::XorAssign)], SymbolKind::Xor)
}

pub(crate) fn tilde(s: &mut Scan<'_, '_>) -> Lexeme {
    operator(s, &[], SymbolKind::BitComplement)
}

/// `.` may start a float literal.
pub(crate) fn point(s: &mut Scan<'_, '_>) -> Lexeme {
    if s.cursor.second().is_some_and(|c| c.is_ascii_digit()) {
        return number::number(s);
    }
    use SymbolKind::*;
    operator(s, &[("...", Ellipsis), (".*", PointerToMemberOfObject)], Point)
}

/// `/` may start either comment form.
pub(crate) fn slash(s: &mut Scan<'_, '_>) -> Lexeme {
    if s.cursor.starts_with("//") {
        return comment::line_comment(s);
    }
    if s.cursor.starts_with("/*") {
        return comment::block_comment_start(s);
    }
    operator(s, &[("/=", SymbolKind::DivideAssign)], SymbolKind::Divide)
}

/// A backslash is only meaningful as a line continuation.
pub(crate) fn backslash(s: &mut Scan<'_, '_>) -> Lexeme {
    let continuation = s.cursor.second().is_none();
    s.cursor.bump();
    if continuation {
        Lexeme::symbol(SymbolKind::BackSlash)
    } else {
        Lexeme::new(TokenKind::Unknown)
    }
}

pub(crate) fn semicolon(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.bump();
    if s.state.mode == ScanMode::Asm {
        s.state.mode = ScanMode::Default;
    }
    s.state.pop_statements();
    Lexeme::symbol(SymbolKind::SemiColon)
}

pub(crate) fn brace_open(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.bump();
    if s.state.mode == ScanMode::Asm {
        s.state.mode = ScanMode::AsmBlock;
        s.asm_start = true;
    }
    let state = &mut *s.state;
    state.brace_level += 1;
    state.left_braces += 1;
    // a braced body replaces the pending control statement markers
    state.pop_statements();
    state.push_indent(IndentKind::Brace);
    Lexeme::symbol(SymbolKind::BraceOpen)
}

pub(crate) fn brace_close(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.bump();
    if s.state.mode == ScanMode::AsmBlock {
        s.state.mode = ScanMode::Default;
    }
    let state = &mut *s.state;
    state.brace_level = state.brace_level.saturating_sub(1);
    if state.left_braces > 0 {
        state.left_braces -= 1;
    } else {
        state.right_braces += 1;
    }
    state.pop_indent(IndentKind::Brace);
    Lexeme::symbol(SymbolKind::BraceClose)
}

pub(crate) fn round_open(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.bump();
    s.state.parenthesis_level += 1;
    s.state.push_indent(IndentKind::Parenthesis);
    Lexeme::symbol(SymbolKind::RoundOpen)
}

pub(crate) fn round_close(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.bump();
    s.state.parenthesis_level = s.state.parenthesis_level.saturating_sub(1);
    s.state.pop_indent(IndentKind::Parenthesis);
    Lexeme::symbol(SymbolKind::RoundClose)
}

pub(crate) fn square_open(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.bump();
    s.state.bracket_level += 1;
    s.state.push_indent(IndentKind::Bracket);
    Lexeme::symbol(SymbolKind::SquareOpen)
}

pub(crate) fn square_close(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.bump();
    s.state.bracket_level = s.state.bracket_level.saturating_sub(1);
    s.state.pop_indent(IndentKind::Bracket);
    Lexeme::symbol(SymbolKind::SquareClose)
}
