//! Token model produced by the scanner.

use text_size::{TextRange, TextSize};

use crate::base::AttributeKind;

/// Lexical classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Number,
    Float,
    Hex,
    Octal,
    String,
    StringEscape,
    RawString,
    Char,
    Comment,
    Directive,
    Symbol,
    Space,
    /// Any token inside an `asm` statement or block.
    Asm,
    Unknown,
    EndOfLine,
}

impl TokenKind {
    /// The display category this classification is painted with.
    pub fn attribute(self) -> AttributeKind {
        match self {
            Self::Asm => AttributeKind::Assembler,
            Self::Comment => AttributeKind::Comment,
            Self::Directive => AttributeKind::Preprocessor,
            Self::Identifier => AttributeKind::Identifier,
            Self::Keyword => AttributeKind::ReservedWord,
            Self::Number => AttributeKind::Number,
            Self::Float => AttributeKind::Float,
            Self::Hex => AttributeKind::Hexadecimal,
            Self::Octal => AttributeKind::Octal,
            Self::Space => AttributeKind::Space,
            Self::String | Self::RawString => AttributeKind::String,
            Self::StringEscape => AttributeKind::StringEscapeSequence,
            Self::Char => AttributeKind::Character,
            Self::Symbol => AttributeKind::Symbol,
            Self::Unknown | Self::EndOfLine => AttributeKind::IllegalChar,
        }
    }

    pub fn is_number(self) -> bool {
        matches!(self, Self::Number | Self::Float | Self::Hex | Self::Octal)
    }

    /// Kinds whose token may be cut off by the end of the line.
    pub fn can_span_lines(self) -> bool {
        matches!(self, Self::Comment | Self::String | Self::RawString)
    }
}

/// Operator and punctuation subtype of a [`TokenKind::Symbol`] token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    // & && &=
    BitAnd,
    LogAnd,
    AndAssign,
    // = ==
    Assign,
    LogEqual,
    // : ::
    Colon,
    ScopeResolution,
    Comma,
    // > >= >> >>=
    GreaterThan,
    GreaterThanEqual,
    ShiftRight,
    ShiftRightAssign,
    // < <= << <<=
    LessThan,
    LessThanEqual,
    ShiftLeft,
    ShiftLeftAssign,
    // - -- -= -> ->*
    Subtract,
    Decrement,
    SubtractAssign,
    Arrow,
    PointerToMemberOfPointer,
    // % %=
    Mod,
    ModAssign,
    // ! !=
    LogComplement,
    NotEqual,
    // | || |=
    BitOr,
    LogOr,
    OrAssign,
    // + ++ +=
    Add,
    Increment,
    AddAssign,
    // . .* ...
    Point,
    PointerToMemberOfObject,
    Ellipsis,
    Question,
    // / /=
    Divide,
    DivideAssign,
    // * *=
    Star,
    MultiplyAssign,
    // ^ ^=
    Xor,
    XorAssign,
    BitComplement,
    BackSlash,
    SemiColon,
    RoundOpen,
    RoundClose,
    SquareOpen,
    SquareClose,
    BraceOpen,
    BraceClose,
}

/// Coarse category used by editor logic (bracket matching, completion
/// triggers) that does not care about number radixes or operator subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Default,
    Comment,
    Directive,
    Identifier,
    Keyword,
    Space,
    String,
    StringEscape,
    Character,
    Symbol,
    Number,
}

/// A token with its kind and byte range inside the scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: TextRange,
    pub symbol: Option<SymbolKind>,
    /// `false` when a comment or string token is continued on the next line
    /// (or by an escape sequence on this one).
    pub finished: bool,
}

/// Offsets past `u32::MAX` saturate; lines that long are not tokenized faithfully.
fn offset(value: usize) -> TextSize {
    TextSize::try_from(value).unwrap_or(TextSize::new(u32::MAX))
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "token range must be ordered");
        Self {
            kind,
            range: TextRange::new(offset(start), offset(end)),
            symbol: None,
            finished: true,
        }
    }

    pub fn with_symbol(mut self, symbol: Option<SymbolKind>) -> Self {
        self.symbol = symbol;
        self
    }

    pub fn with_finished(mut self, finished: bool) -> Self {
        self.finished = finished;
        self
    }

    /// Start offset in bytes.
    pub fn start(&self) -> usize {
        u32::from(self.range.start()) as usize
    }

    /// End offset in bytes (exclusive).
    pub fn end(&self) -> usize {
        u32::from(self.range.end()) as usize
    }

    /// Token length in bytes.
    pub fn len(&self) -> usize {
        u32::from(self.range.len()) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Extract the token's text from the line it was scanned from.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start()..self.end()]
    }

    pub fn attribute(&self) -> AttributeKind {
        self.kind.attribute()
    }

    /// Whether the byte `offset` falls inside this token.
    pub fn covers(&self, offset: usize) -> bool {
        self.start() <= offset && offset < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_offsets() {
        let line = "int x;";
        let token = Token::new(TokenKind::Identifier, 4, 5);
        assert_eq!(token.start(), 4);
        assert_eq!(token.end(), 5);
        assert_eq!(token.len(), 1);
        assert_eq!(token.text(line), "x");
        assert!(token.covers(4));
        assert!(!token.covers(5));
    }

    #[test]
    fn test_oversized_offsets_saturate() {
        let token = Token::new(TokenKind::Comment, 7, usize::MAX);
        assert_eq!(token.start(), 7);
        assert_eq!(token.end(), u32::MAX as usize);
    }

    #[test]
    fn test_kind_attributes() {
        assert_eq!(TokenKind::Keyword.attribute(), AttributeKind::ReservedWord);
        assert_eq!(TokenKind::RawString.attribute(), AttributeKind::String);
        assert_eq!(TokenKind::Unknown.attribute(), AttributeKind::IllegalChar);
        assert_eq!(TokenKind::Asm.attribute(), AttributeKind::Assembler);
    }
}
