//! Property-based tests for the tokenizer and the rescan driver.
//!
//! - Every line is covered by contiguous, non-empty tokens from any
//!   incoming mode
//! - Tokenizing is deterministic
//! - Incremental rescans agree with a full rescan

use proptest::prelude::*;
use synscan::rescan::{rescan_all, rescan_from};
use synscan::{CppTokenizer, LineBuffer, LineState, ScanMode, tokenize_line};

const MODES: [ScanMode; 20] = [
    ScanMode::Default,
    ScanMode::LineComment,
    ScanMode::BlockComment,
    ScanMode::BlockCommentInAsm,
    ScanMode::BlockCommentInAsmBlock,
    ScanMode::String,
    ScanMode::MultiLineString,
    ScanMode::StringEscape,
    ScanMode::MultiLineStringEscape,
    ScanMode::RawString,
    ScanMode::RawStringInParens,
    ScanMode::Char,
    ScanMode::Directive,
    ScanMode::DirectiveContinuation,
    ScanMode::DirectiveBlockComment,
    ScanMode::DefineIdentifier,
    ScanMode::DefineBody,
    ScanMode::Asm,
    ScanMode::AsmBlock,
    ScanMode::CommentEnded,
];

/// Generate one line of C-flavored text
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Punctuation-heavy noise
        "[ a-z0-9_{}()\\[\\];\"'/*#\\\\<>=+.:&|!-]{0,40}",
        // Plausible statements
        "(int|char|if|while|return|asm) [a-z]{1,6}( = [0-9]{1,4})?;",
        // Comment and string fragments
        "(/\\*|\\*/|//|\"|R\"\\(|\\)\")[ a-z]{0,10}\\\\?",
        // Directives
        "#(define|include|if) [A-Z_]{1,8}( \\\\)?",
    ]
}

fn incoming_strategy() -> impl Strategy<Value = LineState> {
    (0..MODES.len(), 0u32..4).prop_map(|(mode, braces)| LineState {
        mode: MODES[mode],
        brace_level: braces,
        ..LineState::default()
    })
}

proptest! {
    #[test]
    fn tokens_cover_line_from_any_mode(
        text in line_strategy(),
        incoming in incoming_strategy(),
    ) {
        let (tokens, _) = tokenize_line(&text, &incoming);
        prop_assert!(tokens.len() <= text.len() + 1);

        let mut end = 0;
        for token in &tokens {
            prop_assert_eq!(token.start(), end);
            prop_assert!(token.end() > token.start());
            end = token.end();
        }
        prop_assert_eq!(end, text.len());
    }

    #[test]
    fn tokenizing_is_deterministic(
        text in line_strategy(),
        incoming in incoming_strategy(),
    ) {
        let first = tokenize_line(&text, &incoming);
        let second = tokenize_line(&text, &incoming);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn incremental_rescan_matches_full_rescan(
        document in prop::collection::vec(line_strategy(), 1..24),
        edits in prop::collection::vec((any::<prop::sample::Index>(), line_strategy()), 1..6),
    ) {
        let mut tokenizer = CppTokenizer::new();
        // a leading line keeps the buffer non-empty
        let text = format!("int first;\n{}", document.join("\n"));
        let mut lines = LineBuffer::from_text(&text);
        rescan_all(&mut tokenizer, &mut lines);

        for (index, text) in edits {
            let index = index.index(lines.len());
            lines.put_line(index, text).unwrap();
            rescan_from(&mut tokenizer, &mut lines, index);
        }

        let mut fresh = LineBuffer::from_text(&lines.text());
        rescan_all(&mut CppTokenizer::new(), &mut fresh);
        prop_assert_eq!(fresh.len(), lines.len());
        for index in 0..lines.len() {
            prop_assert_eq!(lines.state(index), fresh.state(index), "line {}", index);
        }
    }
}
