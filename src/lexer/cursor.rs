//! Scanner context threaded through every transition handler.

use unicode_ident::{is_xid_continue, is_xid_start};

use super::state::LineState;
use super::token::{SymbolKind, TokenKind};

/// Byte cursor over one line. Always sits on a char boundary.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(line: &'a str, pos: usize) -> Self {
        Self { line, pos }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Text between the start of the line and the cursor.
    pub(crate) fn before(&self) -> &'a str {
        &self.line[..self.pos]
    }

    pub(crate) fn first(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn second(&self) -> Option<char> {
        self.nth(1)
    }

    pub(crate) fn nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// The char just behind the cursor.
    pub(crate) fn prev(&self) -> Option<char> {
        self.before().chars().next_back()
    }

    pub(crate) fn is_eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.first()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub(crate) fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.bump().is_none() {
                break;
            }
        }
    }

    /// Consume chars while `pred` holds and return how many bytes were eaten.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while self.first().is_some_and(&pred) {
            self.bump();
        }
        self.pos - start
    }

    pub(crate) fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c == '_' || is_xid_start(c)
}

pub(crate) fn is_ident_char(c: char) -> bool {
    c == '_' || is_xid_continue(c)
}

pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Mutable scan context: the cursor plus the state being threaded through
/// the line.
#[derive(Debug)]
pub(crate) struct Scan<'a, 's> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) state: &'s mut LineState,
    /// The current token introduced assembly mode and is not itself assembly.
    pub(crate) asm_start: bool,
}

impl<'a, 's> Scan<'a, 's> {
    pub(crate) fn new(line: &'a str, pos: usize, state: &'s mut LineState) -> Self {
        Self {
            cursor: Cursor::new(line, pos),
            state,
            asm_start: false,
        }
    }
}

/// What a handler classified the consumed span as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub(crate) kind: TokenKind,
    pub(crate) symbol: Option<SymbolKind>,
}

impl Lexeme {
    pub(crate) fn new(kind: TokenKind) -> Self {
        Self { kind, symbol: None }
    }

    pub(crate) fn symbol(symbol: SymbolKind) -> Self {
        Self {
            kind: TokenKind::Symbol,
            symbol: Some(symbol),
        }
    }
}

/// A transition handler.
pub(crate) type Handler = fn(&mut Scan<'_, '_>) -> Lexeme;
