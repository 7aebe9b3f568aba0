//! Line-indexed text buffer with a Line State slot per line.
//!
//! The buffer owns the persisted scanner states; only the rescan driver
//! writes them. Every structural edit reports a [`LineChange`] so callers
//! know which lines to rescan.

mod lines;

pub use lines::{LineBuffer, LineChange};
