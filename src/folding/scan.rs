use tracing::{debug, trace};

use crate::buffer::LineBuffer;
use crate::lexer::{Highlighter, Token, Tokens};

use super::region::FoldRegion;
use super::tree::{FoldRange, FoldTree};

enum FoldAction {
    Open,
    Close,
}

/// Fold action of `region` on a line. A line holding both an opener and a
/// closer for the region does neither.
fn line_action(region: &FoldRegion, tokens: &[Token], text: &str) -> Option<FoldAction> {
    let opens = tokens
        .iter()
        .any(|token| region.opens(token.attribute(), token.text(text)));
    let closes = tokens
        .iter()
        .any(|token| region.closes(token.attribute(), token.text(text)));
    match (opens, closes) {
        (true, false) => Some(FoldAction::Open),
        (false, true) => Some(FoldAction::Close),
        _ => None,
    }
}

/// One pass over the buffer, skipping the spans of collapsed ranges in `skip`.
fn find_ranges<H: Highlighter + ?Sized>(
    highlighter: &mut H,
    lines: &LineBuffer,
    regions: &[FoldRegion],
    skip: &FoldTree,
) -> Vec<FoldRange> {
    let mut found: Vec<FoldRange> = Vec::new();
    let mut open: Vec<Vec<usize>> = vec![Vec::new(); regions.len()];

    let mut line = 0;
    while line < lines.len() {
        if let Some(range) = skip
            .collapsed_fold_start_at_line(line + 1)
            .and_then(|id| skip.get(id))
        {
            trace!("[FOLD] skipping collapsed {}..{}", range.from_line, range.to_line);
            line = range.to_line.max(line + 1);
            continue;
        }

        // without a stored state the previous line's outgoing state carries over
        match line.checked_sub(1).map(|prev| lines.state(prev)) {
            None => highlighter.reset_state(),
            Some(Some(state)) => highlighter.set_state(state),
            Some(None) => {}
        }
        let text = lines.line(line).unwrap_or_default();
        highlighter.set_line(text, line);
        let tokens: Vec<Token> = Tokens::new(&mut *highlighter).collect();

        for (index, region) in regions.iter().enumerate() {
            match line_action(region, &tokens, text) {
                Some(FoldAction::Open) => {
                    open[index].push(found.len());
                    found.push(FoldRange::new(line + 1, line + 1, index));
                }
                Some(FoldAction::Close) => {
                    if let Some(start) = open[index].pop() {
                        found[start].to_line = line + 1;
                    }
                }
                None => {}
            }
        }
        line += 1;
    }
    found
}

/// Build a fresh fold tree from the whole buffer.
pub fn scan_for_fold_ranges<H: Highlighter + ?Sized>(
    highlighter: &mut H,
    lines: &LineBuffer,
    regions: &[FoldRegion],
) -> FoldTree {
    let tree = FoldTree::from_ranges(find_ranges(highlighter, lines, regions, &FoldTree::new()));
    debug!("[FOLD] scan_for_fold_ranges: {} range(s)", tree.len());
    tree
}

/// Rebuild `tree`, keeping collapsed ranges and everything hidden inside
/// them as they are.
pub fn rescan_for_fold_ranges<H: Highlighter + ?Sized>(
    tree: &mut FoldTree,
    highlighter: &mut H,
    lines: &LineBuffer,
    regions: &[FoldRegion],
) {
    let kept: Vec<FoldRange> = tree
        .iter()
        .filter(|(id, range)| range.collapsed || tree.parent_collapsed(*id))
        .map(|(_, range)| range.clone())
        .collect();
    let kept_count = kept.len();
    let kept = FoldTree::from_ranges(kept);

    let fresh = find_ranges(highlighter, lines, regions, &kept);
    let fresh_count = fresh.len();
    let mut ranges = kept.into_ranges();
    ranges.extend(fresh);
    *tree = FoldTree::from_ranges(ranges);

    debug!(
        "[FOLD] rescan_for_fold_ranges: kept {}, found {}",
        kept_count, fresh_count
    );
}
