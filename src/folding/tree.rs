//! Arena of fold ranges.
//!
//! Ranges are kept in one vector sorted by start line (outer ranges before
//! the ranges they contain). Parent and child links are indices into that
//! vector and are recomputed from containment whenever the set changes, so
//! a [`FoldId`] is only valid until the next structural change.

use std::cmp::Reverse;

use tracing::trace;

use crate::error::EditError;

/// Index of a range inside a [`FoldTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FoldId(usize);

impl FoldId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A collapsible line span, 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldRange {
    pub from_line: usize,
    pub to_line: usize,
    pub collapsed: bool,
    /// Lines hidden while collapsed; zero otherwise.
    pub lines_collapsed: usize,
    /// Index into the region table the range was found with.
    pub region: usize,
    parent: Option<FoldId>,
    children: Vec<FoldId>,
}

impl FoldRange {
    /// An open range; `to_line` stays at `from_line` until a close is seen.
    pub fn new(from_line: usize, to_line: usize, region: usize) -> Self {
        Self {
            from_line,
            to_line,
            collapsed: false,
            lines_collapsed: 0,
            region,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<FoldId> {
        self.parent
    }

    pub fn children(&self) -> &[FoldId] {
        &self.children
    }

    pub fn contains(&self, other: &FoldRange) -> bool {
        self.from_line <= other.from_line && other.to_line <= self.to_line
    }

    fn move_by(&mut self, delta: isize) {
        self.from_line = self.from_line.saturating_add_signed(delta);
        self.to_line = self.to_line.saturating_add_signed(delta);
    }

    fn collapse(&mut self) {
        self.collapsed = true;
        self.lines_collapsed = self.to_line - self.from_line;
    }

    fn uncollapse(&mut self) {
        self.collapsed = false;
        self.lines_collapsed = 0;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldTree {
    ranges: Vec<FoldRange>,
}

impl FoldTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_ranges(ranges: Vec<FoldRange>) -> Self {
        let mut tree = Self { ranges };
        tree.relink();
        tree
    }

    pub(crate) fn into_ranges(self) -> Vec<FoldRange> {
        self.ranges
    }

    /// Sort by start line and rebuild parent/child links from containment.
    fn relink(&mut self) {
        self.ranges
            .sort_by_key(|range| (range.from_line, Reverse(range.to_line)));
        let mut open: Vec<usize> = Vec::new();
        for index in 0..self.ranges.len() {
            while let Some(&top) = open.last() {
                if self.ranges[top].contains(&self.ranges[index]) {
                    break;
                }
                open.pop();
            }
            let parent = open.last().copied();
            let range = &mut self.ranges[index];
            range.parent = parent.map(FoldId);
            range.children.clear();
            if let Some(parent) = parent {
                self.ranges[parent].children.push(FoldId(index));
            }
            open.push(index);
        }
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn get(&self, id: FoldId) -> Option<&FoldRange> {
        self.ranges.get(id.0)
    }

    fn range_mut(&mut self, id: FoldId) -> Result<&mut FoldRange, EditError> {
        self.ranges.get_mut(id.0).ok_or(EditError::UnknownFold(id.0))
    }

    /// All ranges, sorted by start line.
    pub fn iter(&self) -> impl Iterator<Item = (FoldId, &FoldRange)> {
        self.ranges
            .iter()
            .enumerate()
            .map(|(index, range)| (FoldId(index), range))
    }

    pub fn roots(&self) -> impl Iterator<Item = FoldId> + '_ {
        self.iter()
            .filter(|(_, range)| range.parent.is_none())
            .map(|(id, _)| id)
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    pub fn collapse(&mut self, id: FoldId) -> Result<&FoldRange, EditError> {
        let range = self.range_mut(id)?;
        range.collapse();
        trace!(
            "[FOLD] collapse {}..{} ({} hidden)",
            range.from_line, range.to_line, range.lines_collapsed
        );
        Ok(&*range)
    }

    pub fn uncollapse(&mut self, id: FoldId) -> Result<&FoldRange, EditError> {
        let range = self.range_mut(id)?;
        range.uncollapse();
        trace!("[FOLD] uncollapse {}..{}", range.from_line, range.to_line);
        Ok(&*range)
    }

    pub fn collapse_all(&mut self) {
        self.ranges.iter_mut().for_each(FoldRange::collapse);
    }

    pub fn uncollapse_all(&mut self) {
        self.ranges.iter_mut().for_each(FoldRange::uncollapse);
    }

    /// Some ancestor of `id` is collapsed.
    pub fn parent_collapsed(&self, id: FoldId) -> bool {
        let mut current = self.get(id).and_then(|range| range.parent);
        while let Some(parent) = current {
            let Some(range) = self.get(parent) else {
                return false;
            };
            if range.collapsed {
                return true;
            }
            current = range.parent;
        }
        false
    }

    /// Collapsed and not already hidden inside a collapsed ancestor.
    fn is_outermost_collapsed(&self, id: FoldId) -> bool {
        self.get(id).is_some_and(|range| range.collapsed) && !self.parent_collapsed(id)
    }

    pub fn fold_start_at_line(&self, line: usize) -> Option<FoldId> {
        self.iter()
            .take_while(|(_, range)| range.from_line <= line)
            .find(|(_, range)| range.from_line == line)
            .map(|(id, _)| id)
    }

    pub fn fold_end_at_line(&self, line: usize) -> Option<FoldId> {
        self.iter()
            .take_while(|(_, range)| range.from_line <= line)
            .find(|(_, range)| range.to_line == line)
            .map(|(id, _)| id)
    }

    pub fn collapsed_fold_start_at_line(&self, line: usize) -> Option<FoldId> {
        self.iter()
            .take_while(|(_, range)| range.from_line <= line)
            .find(|(_, range)| range.from_line == line && range.collapsed)
            .map(|(id, _)| id)
    }

    /// Innermost range strictly around `line`, not collapsed.
    pub fn fold_around_line(&self, line: usize) -> Option<FoldId> {
        self.fold_around_line_ex(line, false, false, false)
    }

    /// Innermost range around `line` whose collapsed flag is
    /// `want_collapsed`. The range's own first or last line only counts when
    /// `accept_from` or `accept_to` is set.
    pub fn fold_around_line_ex(
        &self,
        line: usize,
        want_collapsed: bool,
        accept_from: bool,
        accept_to: bool,
    ) -> Option<FoldId> {
        let matches = |id: &FoldId| {
            self.get(*id).is_some_and(|range| {
                let after_start = range.from_line < line || (accept_from && range.from_line <= line);
                let before_end = range.to_line > line || (accept_to && range.to_line >= line);
                after_start && before_end && range.collapsed == want_collapsed
            })
        };

        let mut found = self.roots().find(matches)?;
        while let Some(child) = self
            .get(found)
            .and_then(|range| range.children.iter().copied().find(matches))
        {
            found = child;
        }
        Some(found)
    }

    /// Buffer line shown on display `row`, both 1-based.
    pub fn fold_row_to_line(&self, row: usize) -> usize {
        let mut line = row;
        for (id, range) in self.iter() {
            if self.is_outermost_collapsed(id) && range.from_line < line {
                line += range.lines_collapsed;
            }
        }
        line
    }

    /// Display row of buffer `line`; a hidden line maps to its fold's row.
    pub fn fold_line_to_row(&self, line: usize) -> usize {
        let mut row = line;
        for (index, range) in self.ranges.iter().enumerate().rev() {
            if !self.is_outermost_collapsed(FoldId(index)) {
                continue;
            }
            if range.to_line < line {
                row = row.saturating_sub(range.lines_collapsed);
            } else if range.from_line < line {
                row = row.saturating_sub(line - range.from_line);
            }
        }
        row
    }

    /// Adjust for `count` lines inserted so that the first of them is
    /// 1-based `line`.
    ///
    /// Ranges below move down; a range the insertion lands inside grows and
    /// is opened.
    pub fn lines_inserted(&mut self, line: usize, count: usize) {
        let delta = count as isize;
        for range in &mut self.ranges {
            if range.from_line >= line {
                range.move_by(delta);
            } else if line <= range.to_line {
                range.to_line += count;
                range.uncollapse();
            }
        }
        self.relink();
    }

    /// Adjust for `count` lines deleted starting at 1-based `line`.
    ///
    /// Deleting only the first line of a range opens it; ranges starting in
    /// a larger deleted block go away; ranges spanning the block shrink and
    /// are opened; ranges below move up.
    pub fn lines_deleted(&mut self, line: usize, count: usize) {
        if count == 0 {
            return;
        }
        let end = line + count - 1;
        let before = self.ranges.len();
        self.ranges.retain_mut(|range| {
            if range.from_line == line && count == 1 {
                range.uncollapse();
                range.to_line = range.to_line.saturating_sub(1).max(range.from_line);
                true
            } else if (line..=end).contains(&range.from_line) {
                false
            } else if range.from_line > end {
                range.move_by(-(count as isize));
                true
            } else {
                if line <= range.to_line {
                    let overlap = range.to_line.min(end) - line + 1;
                    range.to_line = range.to_line.saturating_sub(overlap).max(range.from_line);
                    range.uncollapse();
                }
                true
            }
        });
        trace!(
            "[FOLD] lines_deleted {}+{}: dropped {} range(s)",
            line,
            count,
            before - self.ranges.len()
        );
        self.relink();
    }
}
