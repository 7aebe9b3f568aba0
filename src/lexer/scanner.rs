//! C/C++ tokenizer: mode- and char-keyed dispatch over the handlers.

use crate::base::AttributeRegistry;

use super::cursor::{Handler, Lexeme, Scan, is_ident_char, is_ident_start, is_space};
use super::highlighter::{Highlighter, Tokens};
use super::keywords;
use super::state::{IndentKind, LineState, ScanMode};
use super::token::{SymbolKind, Token, TokenKind, TokenType};
use super::{comment, directive, literal, number, punct};

/// Handler resuming a construct left open by an earlier token or line.
fn continuation(mode: ScanMode) -> Option<Handler> {
    let handler: Handler = match mode {
        ScanMode::BlockComment
        | ScanMode::BlockCommentInAsm
        | ScanMode::BlockCommentInAsmBlock
        | ScanMode::DirectiveBlockComment => comment::block_comment,
        ScanMode::LineComment => comment::line_comment_continued,
        ScanMode::String | ScanMode::MultiLineString => literal::string_body,
        ScanMode::StringEscape | ScanMode::MultiLineStringEscape => literal::escape_sequence,
        ScanMode::RawString | ScanMode::RawStringInParens => literal::raw_string,
        ScanMode::Char => literal::char_body,
        ScanMode::Directive | ScanMode::DirectiveContinuation | ScanMode::DefineBody => {
            directive::directive_body
        }
        ScanMode::DefineIdentifier => directive::define_identifier,
        ScanMode::Default | ScanMode::CommentEnded | ScanMode::Asm | ScanMode::AsmBlock => {
            return None;
        }
    };
    Some(handler)
}

/// Handler for a token starting with `c`.
fn char_handler(c: char) -> Handler {
    match c {
        '&' => punct::ampersand,
        '=' => punct::equal,
        ':' => punct::colon,
        ',' => punct::comma,
        '>' => punct::greater,
        '<' => punct::less,
        '-' => punct::minus,
        '%' => punct::percent,
        '!' => punct::bang,
        '|' => punct::pipe,
        '+' => punct::plus,
        '?' => punct::question,
        '*' => punct::star,
        '^' => punct::caret,
        '~' => punct::tilde,
        '.' => punct::point,
        '/' => punct::slash,
        '\\' => punct::backslash,
        ';' => punct::semicolon,
        '{' => punct::brace_open,
        '}' => punct::brace_close,
        '(' => punct::round_open,
        ')' => punct::round_close,
        '[' => punct::square_open,
        ']' => punct::square_close,
        '0'..='9' => number::number,
        '"' => literal::string_start,
        '\'' => literal::char_start,
        '#' => directive::hash,
        c if is_ident_start(c) => identifier,
        c if is_space(c) => space,
        _ => unknown,
    }
}

fn dispatch(s: &mut Scan<'_, '_>) -> Lexeme {
    if s.cursor.is_eol() {
        return end_of_line(s);
    }
    if let Some(handler) = continuation(s.state.mode) {
        return handler(s);
    }
    if s.state.mode == ScanMode::CommentEnded {
        s.state.mode = ScanMode::Default;
    }
    if s.state.mode.is_asm() {
        if let Some(lexeme) = literal::asm_literal(s) {
            return lexeme;
        }
    } else if let Some(lexeme) = literal::prefixed_literal(s) {
        return lexeme;
    }
    match s.cursor.first() {
        Some(c) => char_handler(c)(s),
        None => end_of_line(s),
    }
}

/// Close constructs that cannot outlive the line.
fn end_of_line(s: &mut Scan<'_, '_>) -> Lexeme {
    let empty_line = s.cursor.pos() == 0;
    s.state.mode = match s.state.mode {
        ScanMode::String
        | ScanMode::StringEscape
        | ScanMode::MultiLineStringEscape
        | ScanMode::Directive
        | ScanMode::DefineIdentifier
        | ScanMode::DefineBody => ScanMode::Default,
        ScanMode::LineComment
        | ScanMode::MultiLineString
        | ScanMode::DirectiveContinuation
        | ScanMode::Char
        | ScanMode::CommentEnded
            if empty_line =>
        {
            ScanMode::Default
        }
        mode => mode,
    };
    Lexeme::new(TokenKind::EndOfLine)
}

fn identifier(s: &mut Scan<'_, '_>) -> Lexeme {
    let start = s.cursor.pos();
    s.cursor.eat_while(is_ident_char);
    let word = &s.cursor.before()[start..];
    let Some(keyword) = keywords::lookup(word) else {
        return Lexeme::new(TokenKind::Identifier);
    };
    if keyword.is_statement() {
        s.state.push_indent(IndentKind::Statement);
    }
    if keyword.is_asm() && !s.state.mode.is_asm() {
        s.state.mode = ScanMode::Asm;
        s.asm_start = true;
    }
    Lexeme::new(TokenKind::Keyword)
}

fn space(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.eat_while(is_space);
    Lexeme::new(TokenKind::Space)
}

fn unknown(s: &mut Scan<'_, '_>) -> Lexeme {
    s.cursor.bump();
    Lexeme::new(TokenKind::Unknown)
}

/// Tokenizer for C and C++ source.
#[derive(Debug, Clone)]
pub struct CppTokenizer {
    line: String,
    line_number: usize,
    /// Scan position; the end of the current token.
    pos: usize,
    token_pos: usize,
    lexeme: Lexeme,
    asm_start: bool,
    state: LineState,
    attributes: AttributeRegistry,
}

impl Default for CppTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CppTokenizer {
    pub const NAME: &'static str = "C++";

    pub fn new() -> Self {
        Self {
            line: String::new(),
            line_number: 0,
            pos: 0,
            token_pos: 0,
            lexeme: Lexeme::new(TokenKind::EndOfLine),
            asm_start: false,
            state: LineState::new(),
            attributes: AttributeRegistry::new(),
        }
    }

    /// Iterate over the remaining tokens of the loaded line.
    pub fn tokens(&mut self) -> Tokens<'_, Self> {
        Tokens::new(self)
    }
}

impl Highlighter for CppTokenizer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn set_line(&mut self, text: &str, line_number: usize) {
        self.line.clear();
        self.line.push_str(text);
        self.line_number = line_number;
        self.pos = 0;
        self.state.begin_line();
        self.next();
    }

    fn next(&mut self) {
        self.asm_start = false;
        self.token_pos = self.pos;
        let mut scan = Scan::new(&self.line, self.pos, &mut self.state);
        // handlers that only switch modes consume nothing; dispatch again
        let lexeme = loop {
            let lexeme = dispatch(&mut scan);
            if scan.cursor.pos() > self.token_pos || lexeme.kind == TokenKind::EndOfLine {
                break lexeme;
            }
        };
        self.pos = scan.cursor.pos();
        self.asm_start = scan.asm_start;
        self.lexeme = lexeme;
    }

    fn eol(&self) -> bool {
        self.lexeme.kind == TokenKind::EndOfLine
    }

    fn token(&self) -> &str {
        &self.line[self.token_pos..self.pos]
    }

    fn token_pos(&self) -> usize {
        self.token_pos
    }

    /// Tokens inside an assembly statement or block report [`TokenKind::Asm`],
    /// except comments, spaces and the token that opened the assembly.
    fn token_kind(&self) -> TokenKind {
        let kind = self.lexeme.kind;
        let passthrough = matches!(
            kind,
            TokenKind::Comment | TokenKind::Space | TokenKind::EndOfLine
        );
        if self.state.mode.is_asm() && !self.asm_start && !passthrough {
            TokenKind::Asm
        } else {
            kind
        }
    }

    fn symbol_kind(&self) -> Option<SymbolKind> {
        self.lexeme.symbol
    }

    fn token_type(&self) -> TokenType {
        match self.lexeme.kind {
            TokenKind::Comment => TokenType::Comment,
            TokenKind::Directive => TokenType::Directive,
            TokenKind::Identifier => TokenType::Identifier,
            TokenKind::Keyword => TokenType::Keyword,
            TokenKind::String | TokenKind::RawString => TokenType::String,
            TokenKind::StringEscape => TokenType::StringEscape,
            TokenKind::Char => TokenType::Character,
            TokenKind::Symbol => TokenType::Symbol,
            TokenKind::Number | TokenKind::Float | TokenKind::Hex | TokenKind::Octal => {
                TokenType::Number
            }
            TokenKind::Space => match self.state.mode {
                mode if mode.is_comment_unfinished() => TokenType::Comment,
                ScanMode::Directive
                | ScanMode::DirectiveContinuation
                | ScanMode::DefineIdentifier
                | ScanMode::DefineBody => TokenType::Directive,
                ScanMode::String
                | ScanMode::MultiLineString
                | ScanMode::StringEscape
                | ScanMode::MultiLineStringEscape
                | ScanMode::RawString
                | ScanMode::RawStringInParens => TokenType::String,
                ScanMode::Char => TokenType::Character,
                _ => TokenType::Space,
            },
            TokenKind::Asm | TokenKind::Unknown | TokenKind::EndOfLine => TokenType::Default,
        }
    }

    fn token_finished(&self) -> bool {
        !(self.lexeme.kind.can_span_lines() && self.state.mode.is_inside_token())
    }

    fn current_token(&self) -> Token {
        Token::new(self.token_kind(), self.token_pos, self.pos)
            .with_symbol(self.lexeme.symbol)
            .with_finished(self.token_finished())
    }

    fn state(&self) -> &LineState {
        &self.state
    }

    fn set_state(&mut self, state: &LineState) {
        self.state.clone_from(state);
        self.state.begin_line();
    }

    fn reset_state(&mut self) {
        self.state = LineState::new();
        self.asm_start = false;
    }

    fn is_keyword(&self, word: &str) -> bool {
        keywords::lookup(word).is_some()
    }

    fn attributes(&self) -> &AttributeRegistry {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeRegistry {
        &mut self.attributes
    }

    fn line_number(&self) -> usize {
        self.line_number
    }
}

/// Tokenize one line from `incoming`, returning its tokens and outgoing state.
pub fn tokenize_line(text: &str, incoming: &LineState) -> (Vec<Token>, LineState) {
    let mut tokenizer = CppTokenizer::new();
    tokenizer.set_state(incoming);
    tokenizer.set_line(text, 0);
    let tokens = tokenizer.tokens().collect();
    (tokens, tokenizer.state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kinds(text: &str, incoming: &LineState) -> (Vec<(TokenKind, String)>, LineState) {
        let (tokens, state) = tokenize_line(text, incoming);
        let kinds = tokens
            .iter()
            .map(|t| (t.kind, t.text(text).to_string()))
            .collect();
        (kinds, state)
    }

    #[test]
    fn test_first_token_available_after_set_line() {
        let mut tokenizer = CppTokenizer::new();
        tokenizer.set_line("return 0;", 1);
        assert_eq!(tokenizer.token(), "return");
        assert_eq!(tokenizer.token_kind(), TokenKind::Keyword);
        assert_eq!(tokenizer.token_attribute(), crate::base::AttributeKind::ReservedWord);
        assert_eq!(tokenizer.line_number(), 1);
        tokenizer.next_to_eol();
        assert!(tokenizer.eol());
        tokenizer.next();
        assert!(tokenizer.eol());
    }

    #[test]
    fn test_empty_line_is_immediately_eol() {
        let mut tokenizer = CppTokenizer::new();
        tokenizer.set_line("", 0);
        assert!(tokenizer.eol());
        assert_eq!(tokenizer.tokens().count(), 0);
    }

    #[test]
    fn test_escape_tokens_inside_string() {
        let text = r#"s = "a\tb";"#;
        let (tokens, state) = kinds(text, &LineState::new());
        let strings: Vec<_> = tokens
            .iter()
            .filter(|(k, _)| matches!(k, TokenKind::String | TokenKind::StringEscape))
            .cloned()
            .collect();
        assert_eq!(
            strings,
            vec![
                (TokenKind::String, r#""a"#.to_string()),
                (TokenKind::StringEscape, r"\t".to_string()),
                (TokenKind::String, r#"b""#.to_string()),
            ]
        );
        assert_eq!(state.mode, ScanMode::Default);
    }

    #[test]
    fn test_string_token_unfinished_before_escape() {
        let mut tokenizer = CppTokenizer::new();
        tokenizer.set_line(r#""a\n""#, 0);
        assert_eq!(tokenizer.token(), r#""a"#);
        assert!(!tokenizer.token_finished());
        tokenizer.next();
        assert_eq!(tokenizer.token_kind(), TokenKind::StringEscape);
        tokenizer.next();
        assert_eq!(tokenizer.token(), "\"");
        assert!(tokenizer.token_finished());
    }

    #[test]
    fn test_asm_block_tokens() {
        let (tokens, state) = kinds("asm { mov eax, 1 }", &LineState::new());
        let expected = [
            (TokenKind::Keyword, "asm"),
            (TokenKind::Space, " "),
            (TokenKind::Symbol, "{"),
            (TokenKind::Space, " "),
            (TokenKind::Asm, "mov"),
            (TokenKind::Space, " "),
            (TokenKind::Asm, "eax"),
            (TokenKind::Asm, ","),
            (TokenKind::Space, " "),
            (TokenKind::Asm, "1"),
            (TokenKind::Space, " "),
            (TokenKind::Symbol, "}"),
        ];
        let expected: Vec<_> = expected.iter().map(|(k, t)| (*k, t.to_string())).collect();
        assert_eq!(tokens, expected);
        assert_eq!(state.mode, ScanMode::Default);
    }

    #[rstest]
    #[case("__asm {", "  mov al, 'a'", ScanMode::AsmBlock)]
    #[case("asm {", "  .ascii \"hi;\"", ScanMode::AsmBlock)]
    #[case("int x;", "asm mov al, 'a'", ScanMode::Asm)]
    fn test_asm_literals_stay_in_assembly(
        #[case] opener: &str,
        #[case] text: &str,
        #[case] mode: ScanMode,
    ) {
        let (_, first) = kinds(opener, &LineState::new());
        let (tokens, second) = kinds(text, &first);
        let (quote_kind, quote_text) = tokens.last().cloned().unwrap();
        assert_eq!(quote_kind, TokenKind::Asm);
        assert!(quote_text.ends_with(['\'', '"']));
        assert_eq!(second.mode, mode);

        let (tokens, _) = kinds("  nop", &second);
        assert_eq!(tokens[1], (TokenKind::Asm, "nop".to_string()));
    }

    #[test]
    fn test_asm_block_spans_lines() {
        let (_, first) = kinds("__asm {", &LineState::new());
        assert_eq!(first.mode, ScanMode::AsmBlock);
        let (tokens, second) = kinds("  nop /* x */", &first);
        assert_eq!(tokens[1], (TokenKind::Asm, "nop".to_string()));
        assert_eq!(tokens[3], (TokenKind::Comment, "/* x */".to_string()));
        assert_eq!(second.mode, ScanMode::AsmBlock);
    }

    #[rstest]
    #[case("while (x) y();", vec![])]
    #[case("for (;;) {", vec![IndentKind::Brace])]
    #[case("else", vec![IndentKind::Statement])]
    #[case("a[i] = f(", vec![IndentKind::Parenthesis])]
    fn test_indent_stack(#[case] text: &str, #[case] indents: Vec<IndentKind>) {
        let (_, state) = tokenize_line(text, &LineState::new());
        assert_eq!(state.indents, indents);
    }

    #[test]
    fn test_raw_string_spans_lines() {
        let (tokens, first) = kinds(r#"auto s = R"(line one"#, &LineState::new());
        assert_eq!(tokens.last().map(|t| t.0), Some(TokenKind::RawString));
        assert_eq!(first.mode, ScanMode::RawStringInParens);
        let (tokens, second) = kinds(r#"two")";"#, &first);
        assert_eq!(tokens[0], (TokenKind::RawString, r#"two")""#.to_string()));
        assert_eq!(second.mode, ScanMode::Default);
    }

    #[test]
    fn test_char_continuation() {
        let (_, first) = kinds(r"c = '\", &LineState::new());
        assert_eq!(first.mode, ScanMode::Char);
        let (tokens, second) = kinds("n';", &first);
        assert_eq!(tokens[0], (TokenKind::Char, "n'".to_string()));
        assert_eq!(second.mode, ScanMode::Default);
    }

    #[rstest]
    #[case(ScanMode::LineComment)]
    #[case(ScanMode::MultiLineString)]
    #[case(ScanMode::DirectiveContinuation)]
    #[case(ScanMode::Char)]
    fn test_empty_line_ends_continuation(#[case] mode: ScanMode) {
        let incoming = LineState {
            mode,
            ..LineState::default()
        };
        let (tokens, state) = tokenize_line("", &incoming);
        assert!(tokens.is_empty());
        assert_eq!(state.mode, ScanMode::Default);
    }

    #[test]
    fn test_block_comment_survives_empty_line() {
        let incoming = LineState {
            mode: ScanMode::BlockComment,
            ..LineState::default()
        };
        let (_, state) = tokenize_line("", &incoming);
        assert_eq!(state.mode, ScanMode::BlockComment);
    }

    #[test]
    fn test_continued_line_comment() {
        let (_, first) = kinds(r"x; // one \", &LineState::new());
        assert_eq!(first.mode, ScanMode::LineComment);
        let (tokens, second) = kinds("two", &first);
        assert_eq!(tokens, vec![(TokenKind::Comment, "two".to_string())]);
        assert_eq!(second.mode, ScanMode::CommentEnded);
        let (tokens, third) = kinds("three", &second);
        assert_eq!(tokens, vec![(TokenKind::Identifier, "three".to_string())]);
        assert_eq!(third.mode, ScanMode::Default);
    }

    #[test]
    fn test_stray_hash_and_at_are_unknown() {
        let (tokens, _) = kinds("x # @", &LineState::new());
        assert_eq!(tokens[2], (TokenKind::Unknown, "#".to_string()));
        assert_eq!(tokens[4], (TokenKind::Unknown, "@".to_string()));
    }

    #[test]
    fn test_space_token_type_follows_context() {
        let mut tokenizer = CppTokenizer::new();
        tokenizer.set_line("#include <a.h>", 0);
        tokenizer.next();
        assert_eq!(tokenizer.token_kind(), TokenKind::Space);
        assert_eq!(tokenizer.token_type(), TokenType::Directive);

        tokenizer.reset_state();
        tokenizer.set_line("int x;", 1);
        tokenizer.next();
        assert_eq!(tokenizer.token_type(), TokenType::Space);
    }

    #[test]
    fn test_reset_state() {
        let mut tokenizer = CppTokenizer::new();
        tokenizer.set_line("{ /* open", 0);
        tokenizer.next_to_eol();
        assert_eq!(tokenizer.state().brace_level, 1);
        tokenizer.reset_state();
        assert_eq!(tokenizer.state(), &LineState::new());
        assert!(tokenizer.is_keyword("class"));
        assert!(!tokenizer.is_keyword("klass"));
        assert_eq!(tokenizer.fold_string(), "...}");
    }
}
