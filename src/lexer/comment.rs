//! Line and block comments.

use super::cursor::{Lexeme, Scan};
use super::state::ScanMode;
use super::token::TokenKind;

/// Entered on `//`. Runs to the end of the line; a trailing `\` continues
/// the comment onto the next line.
pub(crate) fn line_comment(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.skip_to_end();
    if s.cursor.prev() == Some('\\') {
        s.state.mode = ScanMode::LineComment;
    }
    Lexeme::new(TokenKind::Comment)
}

/// A line that starts inside a continued `//` comment.
pub(crate) fn line_comment_continued(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.skip_to_end();
    s.state.mode = if s.cursor.prev() == Some('\\') {
        ScanMode::LineComment
    } else {
        ScanMode::CommentEnded
    };
    Lexeme::new(TokenKind::Comment)
}

/// Entered on `/*`. The comment mode remembers the surrounding context.
pub(crate) fn block_comment_start(s: &mut Scan<'_, '_>) -> Lexeme {
    s.state.mode = match s.state.mode {
        ScanMode::Asm => ScanMode::BlockCommentInAsm,
        ScanMode::AsmBlock => ScanMode::BlockCommentInAsmBlock,
        ScanMode::Directive | ScanMode::DefineBody | ScanMode::DirectiveContinuation => {
            ScanMode::DirectiveBlockComment
        }
        _ => ScanMode::BlockComment,
    };
    s.cursor.bump_n(2);
    block_comment(s)
}

/// Block comment contents up to `*/` or the end of the line.
pub(crate) fn block_comment(s: &mut Scan<'_, '_>) -> Lexeme {
    while !s.cursor.is_eol() {
        if s.cursor.starts_with("*/") {
            s.cursor.bump_n(2);
            s.state.mode = match s.state.mode {
                ScanMode::BlockCommentInAsm => ScanMode::Asm,
                ScanMode::BlockCommentInAsmBlock => ScanMode::AsmBlock,
                ScanMode::DirectiveBlockComment => ScanMode::Directive,
                _ => ScanMode::Default,
            };
            break;
        }
        s.cursor.bump();
    }
    Lexeme::new(TokenKind::Comment)
}
