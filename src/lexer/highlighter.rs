//! The `Highlighter` contract consumed by the rescan driver, the fold
//! builder and the renderer.

use crate::base::{AttributeKind, AttributeRegistry};

use super::state::LineState;
use super::token::{SymbolKind, Token, TokenKind, TokenType};

/// A resumable, line-at-a-time tokenizer.
///
/// Usage is always the same: [`set_state`](Self::set_state) with the
/// outgoing state of the previous line, [`set_line`](Self::set_line), then
/// [`next`](Self::next) until [`eol`](Self::eol). After that
/// [`state`](Self::state) is this line's outgoing state.
pub trait Highlighter: std::fmt::Debug {
    /// Language name; a change of name means a change of language.
    fn name(&self) -> &str;

    /// Start scanning `text`. The first token is available immediately.
    fn set_line(&mut self, text: &str, line_number: usize);

    /// Advance past the current token.
    fn next(&mut self);

    /// The line has no more tokens.
    fn eol(&self) -> bool;

    /// Text of the current token.
    fn token(&self) -> &str;

    /// Byte offset of the current token inside the line.
    fn token_pos(&self) -> usize;

    fn token_kind(&self) -> TokenKind;

    fn symbol_kind(&self) -> Option<SymbolKind>;

    fn token_attribute(&self) -> AttributeKind {
        self.token_kind().attribute()
    }

    fn token_type(&self) -> TokenType;

    /// `false` while the current comment or string token continues past it.
    fn token_finished(&self) -> bool;

    fn current_token(&self) -> Token;

    fn state(&self) -> &LineState;

    fn set_state(&mut self, state: &LineState);

    /// Back to the canonical start-of-document state.
    fn reset_state(&mut self);

    fn next_to_eol(&mut self) {
        while !self.eol() {
            self.next();
        }
    }

    fn is_keyword(&self, word: &str) -> bool;

    /// Placeholder painted in place of a collapsed fold.
    fn fold_string(&self) -> &str {
        "...}"
    }

    fn attributes(&self) -> &AttributeRegistry;

    fn attributes_mut(&mut self) -> &mut AttributeRegistry;

    /// Line number passed to the last [`set_line`](Self::set_line).
    fn line_number(&self) -> usize;
}

/// Lazily drains the tokens of the line currently loaded in a highlighter.
#[derive(Debug)]
pub struct Tokens<'h, H: Highlighter + ?Sized> {
    highlighter: &'h mut H,
}

impl<'h, H: Highlighter + ?Sized> Tokens<'h, H> {
    pub fn new(highlighter: &'h mut H) -> Self {
        Self { highlighter }
    }
}

impl<H: Highlighter + ?Sized> Iterator for Tokens<'_, H> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.highlighter.eol() {
            return None;
        }
        let token = self.highlighter.current_token();
        self.highlighter.next();
        Some(token)
    }
}

impl<H: Highlighter + ?Sized> std::iter::FusedIterator for Tokens<'_, H> {}
