//! Incremental rescan behavior over whole buffers.

mod helpers;

use synscan::rescan::{lines_deleted, lines_inserted, rescan_all, rescan_from};
use synscan::{CppTokenizer, LineBuffer, LineState, ScanMode};

use helpers::source_fixtures::{EXTRA_BRACE, LONG_SOURCE, WELL_FORMED};
use helpers::token_helpers::{modes, scan_document};

fn final_state(lines: &LineBuffer) -> &LineState {
    lines.state(lines.len() - 1).unwrap()
}

#[test]
fn test_well_formed_source_ends_balanced() {
    let (_, lines) = scan_document(WELL_FORMED);
    let last = final_state(&lines);
    assert_eq!(last.mode, ScanMode::Default);
    assert_eq!(last.brace_level, 0);
    assert_eq!(last.bracket_level, 0);
    assert_eq!(last.parenthesis_level, 0);
    assert!(last.indents.is_empty());
}

#[test]
fn test_extra_closing_brace_floors_at_zero() {
    let (_, lines) = scan_document(EXTRA_BRACE);
    let stray = lines.state(1).unwrap();
    assert_eq!(stray.right_braces, 1);
    assert_eq!(stray.left_braces, 0);
    assert_eq!(stray.brace_level, 0);
    assert_eq!(final_state(&lines).brace_level, 0);
}

#[test]
fn test_rename_converges_after_one_line() {
    let (mut tokenizer, mut lines) = scan_document(WELL_FORMED);
    lines
        .put_line(6, r#"    const char *greeting = "hello, \"world\"\n";"#)
        .unwrap();
    let outcome = rescan_from(&mut tokenizer, &mut lines, 6);
    assert!(outcome.converged);
    assert_eq!(outcome.scanned, 1);
    assert_eq!(outcome.last, 6);
}

#[test]
fn test_nesting_change_is_not_convergence() {
    let (mut tokenizer, mut lines) = scan_document(WELL_FORMED);
    // same mode, one more open parenthesis
    lines.put_line(12, "    return (0x0;").unwrap();
    let outcome = rescan_from(&mut tokenizer, &mut lines, 12);
    assert_eq!(outcome.start, 12);
    assert_eq!(outcome.scanned, 2);
    assert!(!outcome.converged);
    assert_eq!(final_state(&lines).parenthesis_level, 1);
}

#[test]
fn test_comment_edit_in_long_source_stops_at_next_comment() {
    let (mut tokenizer, mut lines) = scan_document(&LONG_SOURCE);
    assert!(lines.len() > 800);

    // the open comment swallows the first function and ends at the next `*/`
    lines.put_line(0, "/* helper 0").unwrap();
    let outcome = rescan_from(&mut tokenizer, &mut lines, 0);
    assert!(outcome.converged);
    assert_eq!(outcome.scanned, 5);
    assert_eq!(
        modes(&lines)[..5],
        [
            ScanMode::BlockComment,
            ScanMode::BlockComment,
            ScanMode::BlockComment,
            ScanMode::BlockComment,
            ScanMode::Default
        ]
    );

    lines.put_line(0, "/* helper 0 */").unwrap();
    let outcome = rescan_from(&mut tokenizer, &mut lines, 0);
    assert!(outcome.converged);
    assert_eq!(outcome.last, 4);
    assert_eq!(lines.state(1).map(|s| s.brace_level), Some(1));
}

#[test]
fn test_insert_block_then_delete_it() {
    let (mut tokenizer, mut lines) = scan_document(WELL_FORMED);
    let before: Vec<_> = (0..lines.len()).map(|i| lines.state(i).cloned()).collect();

    lines.insert_lines(2, ["/* inserted", "   block */"]).unwrap();
    lines_inserted(&mut tokenizer, &mut lines, 2, 2);
    assert_eq!(lines.state(2).map(|s| s.mode), Some(ScanMode::BlockComment));
    assert_eq!(lines.state(3).map(|s| s.mode), Some(ScanMode::Default));

    lines.delete_lines(2, 2).unwrap();
    lines_deleted(&mut tokenizer, &mut lines, 2);
    let after: Vec<_> = (0..lines.len()).map(|i| lines.state(i).cloned()).collect();
    assert_eq!(after, before);
}

#[test]
fn test_rescan_all_matches_incremental_result() {
    let (mut tokenizer, mut lines) = scan_document(WELL_FORMED);
    lines.put_line(3, "/* Entry point").unwrap();
    rescan_from(&mut tokenizer, &mut lines, 3);
    lines.put_line(4, "   Prints a greeting.").unwrap();
    rescan_from(&mut tokenizer, &mut lines, 4);
    assert_eq!(final_state(&lines).mode, ScanMode::BlockComment);

    let mut fresh = LineBuffer::from_text(&lines.text());
    rescan_all(&mut CppTokenizer::new(), &mut fresh);
    assert_eq!(modes(&lines), modes(&fresh));
    for index in 0..lines.len() {
        assert_eq!(lines.state(index), fresh.state(index), "line {index}");
    }
}
