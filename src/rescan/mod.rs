//! Incremental rescan driver.
//!
//! After an edit only the lines whose incoming [`LineState`] may have changed
//! are re-tokenized. A pass stops at the first line whose fresh outgoing
//! state is structurally equal to the stored one: everything below is
//! already consistent.
//!
//! All entry points are generic over the [`Highlighter`] so both concrete
//! tokenizers and `dyn Highlighter` can drive them.

use tracing::{debug, trace};

use crate::buffer::LineBuffer;
use crate::lexer::{Highlighter, LineState};

/// What a single rescan pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescanOutcome {
    /// First line scanned.
    pub start: usize,
    /// Last line scanned; the converged line when `converged` is set.
    pub last: usize,
    /// Number of lines tokenized.
    pub scanned: usize,
    /// The pass stopped early on an unchanged state.
    pub converged: bool,
}

impl RescanOutcome {
    fn empty(start: usize) -> Self {
        Self {
            start,
            last: start,
            scanned: 0,
            converged: false,
        }
    }
}

fn load_incoming<H: Highlighter + ?Sized>(highlighter: &mut H, lines: &LineBuffer, index: usize) {
    match index.checked_sub(1).and_then(|prev| lines.state(prev)) {
        Some(state) => highlighter.set_state(state),
        None => highlighter.reset_state(),
    }
}

fn scan_line<H: Highlighter + ?Sized>(highlighter: &mut H, lines: &LineBuffer, index: usize) -> LineState {
    highlighter.set_line(lines.line(index).unwrap_or_default(), index);
    highlighter.next_to_eol();
    highlighter.state().clone()
}

/// Re-tokenize from line `index` until the outgoing state converges or the
/// document ends.
pub fn rescan_from<H: Highlighter + ?Sized>(
    highlighter: &mut H,
    lines: &mut LineBuffer,
    index: usize,
) -> RescanOutcome {
    if index >= lines.len() {
        return RescanOutcome::empty(index);
    }

    load_incoming(highlighter, lines, index);
    let mut outcome = RescanOutcome::empty(index);
    for line in index..lines.len() {
        let state = scan_line(highlighter, lines, line);
        outcome.last = line;
        outcome.scanned += 1;
        if lines.state(line) == Some(&state) {
            trace!("[RESCAN] line {} converged", line);
            outcome.converged = true;
            break;
        }
        trace!("[RESCAN] line {} -> {:?}", line, state.mode);
        lines.set_state(line, state);
    }

    debug!(
        "[RESCAN] rescan_from {}: scanned {} line(s), last {}, converged {}",
        index, outcome.scanned, outcome.last, outcome.converged
    );
    outcome
}

/// Re-tokenize every line, ignoring convergence.
pub fn rescan_all<H: Highlighter + ?Sized>(highlighter: &mut H, lines: &mut LineBuffer) -> RescanOutcome {
    let mut outcome = RescanOutcome::empty(0);
    if lines.is_empty() {
        return outcome;
    }

    highlighter.reset_state();
    for line in 0..lines.len() {
        let state = scan_line(highlighter, lines, line);
        lines.set_state(line, state);
        outcome.last = line;
        outcome.scanned += 1;
    }

    debug!("[RESCAN] rescan_all: scanned {} line(s)", outcome.scanned);
    outcome
}

/// Rescan after `count` lines were inserted at `index`.
///
/// A single pass may converge inside the inserted block, so passes repeat
/// until the block has been covered.
pub fn lines_inserted<H: Highlighter + ?Sized>(
    highlighter: &mut H,
    lines: &mut LineBuffer,
    index: usize,
    count: usize,
) -> usize {
    let end = index.saturating_add(count);
    let mut next = index;
    let mut total = 0;
    loop {
        let outcome = rescan_from(highlighter, lines, next);
        if outcome.scanned == 0 {
            break;
        }
        total += outcome.scanned;
        next = outcome.last + 1;
        if next >= end {
            break;
        }
    }
    debug!(
        "[RESCAN] lines_inserted {}+{}: scanned {} line(s)",
        index, count, total
    );
    total
}

/// Rescan after lines were deleted at `index`.
pub fn lines_deleted<H: Highlighter + ?Sized>(
    highlighter: &mut H,
    lines: &mut LineBuffer,
    index: usize,
) -> RescanOutcome {
    rescan_from(highlighter, lines, index)
}

/// Rescan after line `index` was replaced; returns the last line whose
/// highlighting may have changed.
pub fn line_put<H: Highlighter + ?Sized>(highlighter: &mut H, lines: &mut LineBuffer, index: usize) -> usize {
    rescan_from(highlighter, lines, index).last.max(index)
}
