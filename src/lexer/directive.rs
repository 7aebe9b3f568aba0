//! Preprocessor directives.
//!
//! `#`, any spaces and the directive word form one token. `#define` is
//! followed by the macro name as an identifier; every other body (and the
//! rest of a define) is a single directive token that ends before a comment
//! or continues through a trailing `\`.

use super::comment;
use super::cursor::{Lexeme, Scan, is_ident_char, is_ident_start, is_space};
use super::state::ScanMode;
use super::token::TokenKind;

/// Entered on `#`.
pub(crate) fn hash(s: &mut Scan<'_, '_>) -> Lexeme {
    if !s.cursor.before().trim().is_empty() {
        s.cursor.bump();
        return Lexeme::new(TokenKind::Unknown);
    }
    s.cursor.bump();
    s.cursor.eat_while(is_space);
    let word_start = s.cursor.pos();
    s.cursor.eat_while(is_ident_char);
    let word = &s.cursor.before()[word_start..];
    s.state.mode = if word == "define" {
        ScanMode::DefineIdentifier
    } else {
        ScanMode::Directive
    };
    Lexeme::new(TokenKind::Directive)
}

/// After `#define`: spaces and block comments, then the macro name.
pub(crate) fn define_identifier(s: &mut Scan<'_, '_>) -> Lexeme {
    if s.cursor.eat_while(is_space) > 0 {
        return Lexeme::new(TokenKind::Space);
    }
    if s.cursor.starts_with("/*") {
        s.cursor.bump_n(2);
        while !s.cursor.is_eol() {
            if s.cursor.starts_with("*/") {
                s.cursor.bump_n(2);
                return Lexeme::new(TokenKind::Comment);
            }
            s.cursor.bump();
        }
        s.state.mode = ScanMode::DirectiveBlockComment;
        return Lexeme::new(TokenKind::Comment);
    }
    s.state.mode = ScanMode::DefineBody;
    if s.cursor.first().is_some_and(is_ident_start) {
        s.cursor.eat_while(is_ident_char);
        return Lexeme::new(TokenKind::Identifier);
    }
    // no name; the body handler picks up from here
    Lexeme::new(TokenKind::Directive)
}

/// Directive body, also the entry point for continuation lines.
pub(crate) fn directive_body(s: &mut Scan<'_, '_>) -> Lexeme {
    if s.cursor.eat_while(is_space) > 0 {
        return Lexeme::new(TokenKind::Space);
    }
    if s.cursor.starts_with("//") {
        s.state.mode = ScanMode::Directive;
        return comment::line_comment(s);
    }
    if s.cursor.starts_with("/*") {
        return comment::block_comment_start(s);
    }
    if s.state.mode == ScanMode::DirectiveContinuation {
        s.state.mode = ScanMode::Directive;
    }
    while let Some(c) = s.cursor.first() {
        match c {
            '/' if matches!(s.cursor.second(), Some('/' | '*')) => break,
            '\\' if s.cursor.second().is_none() => {
                s.cursor.bump();
                s.state.mode = ScanMode::DirectiveContinuation;
                break;
            }
            _ => {
                s.cursor.bump();
            }
        }
    }
    Lexeme::new(TokenKind::Directive)
}
