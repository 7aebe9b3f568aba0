//! Editor facade.
//!
//! [`Editor`] owns the line buffer, the active highlighter, the fold tree and
//! the caret, and keeps them consistent across edits:
//!
//! ```text
//! edit → buffer change → fold adjustment → rescan → fold rebuild → invalidation
//! ```
//!
//! Buffer edits take 0-based line indices; positions and fold lines are
//! 1-based.

mod config;

pub use config::EditorConfig;

use tracing::debug;

use crate::base::{AttributeKind, Position};
use crate::buffer::LineBuffer;
use crate::error::{ConfigError, EditError};
use crate::folding::{FoldId, FoldTree, rescan_for_fold_ranges};
use crate::lexer::{Highlighter, Token, Tokens};
use crate::rescan;

/// The token under a buffer position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAt {
    pub token: Token,
    pub attribute: AttributeKind,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Editor {
    lines: LineBuffer,
    highlighter: Option<Box<dyn Highlighter>>,
    folds: FoldTree,
    config: EditorConfig,
    caret: Position,
    /// 1-based inclusive line span needing repaint; `usize::MAX` means to the end.
    invalidated: Option<(usize, usize)>,
    update_depth: usize,
    folds_dirty: bool,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn lines(&self) -> &LineBuffer {
        &self.lines
    }

    pub fn folds(&self) -> &FoldTree {
        &self.folds
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn caret(&self) -> Position {
        self.caret
    }

    pub fn set_caret(&mut self, caret: Position) {
        self.caret = caret;
    }

    pub fn highlighter(&self) -> Option<&dyn Highlighter> {
        self.highlighter.as_deref()
    }

    /// Take the pending repaint span, leaving none.
    pub fn take_invalidation(&mut self) -> Option<(usize, usize)> {
        self.invalidated.take()
    }

    fn invalidate(&mut self, from: usize, to: usize) {
        self.invalidated = Some(match self.invalidated {
            Some((start, end)) => (start.min(from), end.max(to)),
            None => (from, to),
        });
    }

    // ========================================================================
    // TEXT EDITS
    // ========================================================================

    /// Replace the whole text; folds and caret start over.
    pub fn set_text(&mut self, text: &str) {
        self.lines = LineBuffer::from_text(text);
        self.folds.clear();
        self.caret = Position::default();
        if let Some(highlighter) = self.highlighter.as_deref_mut() {
            rescan::rescan_all(highlighter, &mut self.lines);
        }
        self.refresh_folds();
        self.invalidate(1, usize::MAX);
        debug!("[EDITOR] set_text: {} line(s)", self.lines.len());
    }

    pub fn insert_lines<I, S>(&mut self, index: usize, lines: I) -> Result<(), EditError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.lines.len();
        let change = self.lines.insert_lines(index, lines)?;
        debug!("[EDITOR] {:?}", change);
        let count = self.lines.len() - before;
        if self.config.use_code_folding {
            self.folds.lines_inserted(index + 1, count);
        }
        if let Some(highlighter) = self.highlighter.as_deref_mut() {
            rescan::lines_inserted(highlighter, &mut self.lines, index, count);
        }
        self.refresh_folds();
        self.invalidate(index + 1, usize::MAX);
        Ok(())
    }

    pub fn delete_lines(&mut self, index: usize, count: usize) -> Result<(), EditError> {
        let change = self.lines.delete_lines(index, count)?;
        debug!("[EDITOR] {:?}", change);
        if self.config.use_code_folding {
            self.folds.lines_deleted(index + 1, count);
        }
        if let Some(highlighter) = self.highlighter.as_deref_mut() {
            rescan::lines_deleted(highlighter, &mut self.lines, index);
        }
        self.refresh_folds();
        self.invalidate(index + 1, usize::MAX);
        Ok(())
    }

    pub fn put_line(&mut self, index: usize, text: impl Into<String>) -> Result<(), EditError> {
        let change = self.lines.put_line(index, text)?;
        debug!("[EDITOR] {:?}", change);
        let last = match self.highlighter.as_deref_mut() {
            Some(highlighter) => rescan::line_put(highlighter, &mut self.lines, index),
            None => index,
        };
        self.refresh_folds();
        self.invalidate(index + 1, last + 1);
        Ok(())
    }

    pub fn clear(&mut self) {
        let change = self.lines.clear();
        debug!("[EDITOR] {:?}", change);
        self.folds.clear();
        self.caret = Position::default();
        self.invalidate(1, usize::MAX);
    }

    // ========================================================================
    // HIGHLIGHTER AND FOLDING
    // ========================================================================

    /// Install or remove the highlighter. Switching to a different language
    /// rescans every line and rebuilds the folds from scratch.
    pub fn set_highlighter(&mut self, highlighter: Option<Box<dyn Highlighter>>) {
        let changed = match (&self.highlighter, &highlighter) {
            (Some(old), Some(new)) => old.name() != new.name(),
            (None, None) => false,
            _ => true,
        };
        self.highlighter = highlighter;
        if !changed {
            return;
        }

        debug!(
            "[EDITOR] highlighter -> {}",
            self.highlighter.as_deref().map_or("none", |h| h.name())
        );
        if let Some(highlighter) = self.highlighter.as_deref_mut() {
            rescan::rescan_all(highlighter, &mut self.lines);
        }
        self.folds.clear();
        self.refresh_folds();
        self.invalidate(1, usize::MAX);
    }

    pub fn set_use_code_folding(&mut self, enabled: bool) {
        if self.config.use_code_folding == enabled {
            return;
        }
        self.config.use_code_folding = enabled;
        self.folds.clear();
        self.refresh_folds();
        self.invalidate(1, usize::MAX);
    }

    /// Defer fold rebuilds until the matching [`end_update`](Self::end_update).
    pub fn begin_update(&mut self) {
        self.update_depth += 1;
    }

    pub fn end_update(&mut self) {
        self.update_depth = self.update_depth.saturating_sub(1);
        if self.update_depth == 0 && self.folds_dirty {
            self.refresh_folds();
        }
    }

    fn refresh_folds(&mut self) {
        if !self.config.use_code_folding {
            return;
        }
        if self.update_depth > 0 {
            self.folds_dirty = true;
            return;
        }
        self.folds_dirty = false;
        match self.highlighter.as_deref_mut() {
            Some(highlighter) => rescan_for_fold_ranges(
                &mut self.folds,
                highlighter,
                &self.lines,
                &self.config.fold_regions,
            ),
            None => self.folds.clear(),
        }
    }

    /// Collapse a fold, pulling the caret out of the hidden lines onto the
    /// end of the fold's first line.
    pub fn collapse(&mut self, id: FoldId) -> Result<(), EditError> {
        let range = self.folds.collapse(id)?;
        let (from, to) = (range.from_line, range.to_line);
        if self.caret.is_hidden_by(from, to) {
            let chars = self
                .lines
                .line(from - 1)
                .map_or(0, |text| text.chars().count());
            self.caret = Position::new(from, chars + 1);
        }
        self.invalidate(from, usize::MAX);
        Ok(())
    }

    pub fn uncollapse(&mut self, id: FoldId) -> Result<(), EditError> {
        let from = self.folds.uncollapse(id)?.from_line;
        self.invalidate(from, usize::MAX);
        Ok(())
    }

    /// Display row to buffer line, both 1-based.
    pub fn row_to_line(&self, row: usize) -> usize {
        if self.config.use_code_folding {
            self.folds.fold_row_to_line(row)
        } else {
            row
        }
    }

    pub fn line_to_row(&self, line: usize) -> usize {
        if self.config.use_code_folding {
            self.folds.fold_line_to_row(line)
        } else {
            line
        }
    }

    // ========================================================================
    // TOKEN QUERIES
    // ========================================================================

    /// Tokens of line `index`, scanned from the stored state of the line above.
    pub fn line_tokens(&mut self, index: usize) -> Option<Vec<Token>> {
        let text = self.lines.line(index)?;
        let highlighter = self.highlighter.as_deref_mut()?;
        match index.checked_sub(1).and_then(|prev| self.lines.state(prev)) {
            Some(state) => highlighter.set_state(state),
            None => highlighter.reset_state(),
        }
        highlighter.set_line(text, index);
        Some(Tokens::new(highlighter).collect())
    }

    /// The token covering `position`, whose column counts chars from 1.
    pub fn token_at(&mut self, position: Position) -> Option<TokenAt> {
        let index = position.line.checked_sub(1)?;
        let offset = self
            .lines
            .line(index)?
            .char_indices()
            .nth(position.column.checked_sub(1)?)
            .map(|(offset, _)| offset)?;
        let token = self
            .line_tokens(index)?
            .into_iter()
            .find(|token| token.covers(offset))?;
        let text = token.text(self.lines.line(index)?).to_string();
        Some(TokenAt {
            attribute: token.attribute(),
            token,
            text,
        })
    }
}
