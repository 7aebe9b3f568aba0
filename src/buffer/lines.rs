use crate::error::EditError;
use crate::lexer::LineState;

/// A structural change to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    Inserted { index: usize, count: usize },
    Deleted { index: usize, count: usize },
    Put { index: usize },
    Cleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LineSlot {
    text: String,
    /// Outgoing scanner state; `None` until the line has been scanned.
    state: Option<LineState>,
}

impl LineSlot {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<LineSlot>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` on `\n`, dropping a trailing `\r` from each line.
    /// Empty text gives an empty buffer.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        let lines = text
            .split('\n')
            .map(|line| LineSlot::new(line.strip_suffix('\r').unwrap_or(line)))
            .collect();
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|slot| slot.text.as_str())
    }

    /// Stored outgoing state of line `index`.
    pub fn state(&self, index: usize) -> Option<&LineState> {
        self.lines.get(index)?.state.as_ref()
    }

    pub(crate) fn set_state(&mut self, index: usize, state: LineState) {
        if let Some(slot) = self.lines.get_mut(index) {
            slot.state = Some(state);
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|slot| slot.text.as_str())
    }

    /// The whole buffer joined with `\n`.
    pub fn text(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }

    /// Insert `lines` before line `index`; `index == len()` appends.
    pub fn insert_lines<I, S>(&mut self, index: usize, lines: I) -> Result<LineChange, EditError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if index > self.len() {
            return Err(EditError::out_of_range(index, self.len()));
        }
        let before = self.len();
        self.lines
            .splice(index..index, lines.into_iter().map(LineSlot::new));
        Ok(LineChange::Inserted {
            index,
            count: self.len() - before,
        })
    }

    pub fn delete_lines(&mut self, index: usize, count: usize) -> Result<LineChange, EditError> {
        let end = index.saturating_add(count);
        if end > self.len() {
            return Err(EditError::out_of_range(end.saturating_sub(1).max(index), self.len()));
        }
        self.lines.drain(index..end);
        Ok(LineChange::Deleted { index, count })
    }

    /// Replace the text of line `index`.
    ///
    /// The stored state is kept: the next rescan compares against it and
    /// stops at this line when the edit did not change it.
    pub fn put_line(&mut self, index: usize, text: impl Into<String>) -> Result<LineChange, EditError> {
        let len = self.len();
        let slot = self
            .lines
            .get_mut(index)
            .ok_or(EditError::out_of_range(index, len))?;
        slot.text = text.into();
        Ok(LineChange::Put { index })
    }

    pub fn clear(&mut self) -> LineChange {
        self.lines.clear();
        LineChange::Cleared
    }
}
