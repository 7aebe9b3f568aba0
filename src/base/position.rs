/// Position tracking for the caret and fold bookkeeping
///
/// Unlike token ranges (byte offsets inside one line), buffer positions are
/// 1-based like the editor gutter: the first character of the first line is
/// `Position { line: 1, column: 1 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Check if this position lies on a line strictly inside `(from_line, to_line]`,
    /// i.e. on a line that collapsing a fold starting at `from_line` would hide.
    pub fn is_hidden_by(&self, from_line: usize, to_line: usize) -> bool {
        self.line > from_line && self.line <= to_line
    }
}
