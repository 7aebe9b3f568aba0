//! Line State: scanner context carried across a line boundary.
//!
//! The state stored for line `i` is the scanner context *after* line `i`;
//! it is the input state for line `i + 1`. Two states are interchangeable
//! only if they are structurally equal, which is what the rescan driver
//! relies on to stop early.

/// Which lexical construct, if any, is open at the scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanMode {
    #[default]
    Default,
    /// `//` comment continued by a trailing backslash.
    LineComment,
    BlockComment,
    /// `/* */` opened inside an `asm` statement.
    BlockCommentInAsm,
    /// `/* */` opened inside an `asm { }` block.
    BlockCommentInAsmBlock,
    String,
    /// String continued by a trailing backslash.
    MultiLineString,
    /// An escape sequence follows inside a string.
    StringEscape,
    MultiLineStringEscape,
    /// Raw string outside its parenthesized body; a quote closes it.
    RawString,
    /// Raw string inside `( )`; quotes are literal.
    RawStringInParens,
    /// Character literal continued by a trailing backslash.
    Char,
    /// Remainder of a preprocessor directive on the same line.
    Directive,
    /// Directive continued by a trailing backslash.
    DirectiveContinuation,
    /// `/* */` embedded in a directive.
    DirectiveBlockComment,
    /// After `#define`, expecting the macro name.
    DefineIdentifier,
    /// After the macro name.
    DefineBody,
    /// After an `asm` keyword, until `;` or `{`.
    Asm,
    /// Inside `asm { }`.
    AsmBlock,
    /// A continued `//` comment ended on this line.
    CommentEnded,
}

impl ScanMode {
    /// A block comment is open.
    pub fn is_block_comment(self) -> bool {
        matches!(
            self,
            Self::BlockComment
                | Self::BlockCommentInAsm
                | Self::BlockCommentInAsmBlock
                | Self::DirectiveBlockComment
        )
    }

    /// A comment of any kind continues onto the next line.
    pub fn is_comment_unfinished(self) -> bool {
        self.is_block_comment() || self == Self::LineComment
    }

    /// A string continues onto the next line.
    pub fn is_string_unfinished(self) -> bool {
        self == Self::MultiLineString
    }

    pub fn is_asm(self) -> bool {
        matches!(self, Self::Asm | Self::AsmBlock)
    }

    /// The scan position is inside a comment, string, raw string or char
    /// literal token, so that token is not complete yet.
    pub fn is_inside_token(self) -> bool {
        matches!(
            self,
            Self::LineComment
                | Self::BlockComment
                | Self::BlockCommentInAsm
                | Self::BlockCommentInAsmBlock
                | Self::DirectiveBlockComment
                | Self::String
                | Self::MultiLineString
                | Self::StringEscape
                | Self::MultiLineStringEscape
                | Self::RawString
                | Self::RawStringInParens
                | Self::Char
        )
    }
}

/// An unterminated block-opening construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndentKind {
    Brace,
    Bracket,
    Parenthesis,
    /// A bare control statement (`if`, `for`, ...) waiting for its body.
    Statement,
}

/// Scanner context at a line boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineState {
    pub mode: ScanMode,
    pub brace_level: u32,
    pub bracket_level: u32,
    pub parenthesis_level: u32,
    /// `{` opened on this line and not closed on it.
    pub left_braces: u32,
    /// `}` on this line closing a brace from an earlier line.
    pub right_braces: u32,
    pub indents: Vec<IndentKind>,
    /// Index into `indents` where this line's own pushes begin.
    pub first_indent_this_line: usize,
    /// Indents popped on this line whose opener is on an earlier line.
    pub matching_indents: Vec<IndentKind>,
}

impl LineState {
    /// Canonical start-of-document state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the per-line bookkeeping before scanning a new line.
    pub fn begin_line(&mut self) {
        self.left_braces = 0;
        self.right_braces = 0;
        self.first_indent_this_line = self.indents.len();
        self.matching_indents.clear();
    }

    pub fn last_indent(&self) -> Option<IndentKind> {
        self.indents.last().copied()
    }

    pub fn push_indent(&mut self, kind: IndentKind) {
        let idx = self.indents.len();
        if idx < self.first_indent_this_line {
            self.first_indent_this_line = idx;
        }
        self.indents.push(kind);
    }

    /// Pop down to and including the nearest entry of `kind`.
    ///
    /// A closer without any matching opener empties the stack.
    pub fn pop_indent(&mut self, kind: IndentKind) {
        let Some(idx) = self.indents.iter().rposition(|&k| k == kind) else {
            self.indents.clear();
            return;
        };
        self.indents.truncate(idx + 1);
        if idx < self.first_indent_this_line {
            self.matching_indents.push(kind);
        }
        self.indents.pop();
    }

    /// Pop every trailing statement marker.
    pub fn pop_statements(&mut self) {
        while self.last_indent() == Some(IndentKind::Statement) {
            self.pop_indent(IndentKind::Statement);
        }
    }
}
