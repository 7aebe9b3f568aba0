//! Tokenizing helpers returning owned, comparable results.

use synscan::rescan::rescan_all;
use synscan::{CppTokenizer, LineBuffer, LineState, ScanMode, TokenKind, tokenize_line};

/// Tokenize one line into `(kind, text)` pairs plus the outgoing state.
pub fn kinds(text: &str, incoming: &LineState) -> (Vec<(TokenKind, String)>, LineState) {
    let (tokens, state) = tokenize_line(text, incoming);
    let kinds = tokens
        .iter()
        .map(|t| (t.kind, t.text(text).to_string()))
        .collect();
    (kinds, state)
}

/// Tokenize consecutive lines, threading the state through.
pub fn kinds_lines(lines: &[&str]) -> Vec<(Vec<(TokenKind, String)>, LineState)> {
    let mut state = LineState::new();
    lines
        .iter()
        .map(|line| {
            let (tokens, out) = kinds(line, &state);
            state = out.clone();
            (tokens, out)
        })
        .collect()
}

/// A buffer with every line state stored.
pub fn scan_document(text: &str) -> (CppTokenizer, LineBuffer) {
    let mut tokenizer = CppTokenizer::new();
    let mut lines = LineBuffer::from_text(text);
    rescan_all(&mut tokenizer, &mut lines);
    (tokenizer, lines)
}

pub fn modes(lines: &LineBuffer) -> Vec<ScanMode> {
    (0..lines.len())
        .map(|i| lines.state(i).map(|s| s.mode).unwrap_or_default())
        .collect()
}

pub fn owned(expected: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    expected.iter().map(|(k, t)| (*k, t.to_string())).collect()
}
