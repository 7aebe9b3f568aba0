//! # synscan-base
//!
//! Incremental C/C++ lexical analysis for source editors: a resumable
//! line-at-a-time tokenizer, the rescan driver that re-tokenizes only the
//! lines an edit can affect, and the fold-range builder fed by its tokens.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! editor    → Facade: buffer + highlighter + folds + caret + invalidation
//!   ↓
//! folding   → Fold regions, fold range arena, fold scan
//!   ↓
//! rescan    → Incremental rescan driver with early convergence
//!   ↓
//! buffer    → Line buffer with per-line Line State slots
//!   ↓
//! lexer     → Line State, scanner handlers, CppTokenizer, Highlighter trait
//!   ↓
//! base      → Primitives (AttributeRegistry, Position, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → lexer → buffer → rescan → folding → editor)
// ============================================================================

/// Foundation types: attributes, positions, TextRange
pub mod base;

/// Error types for edits and configuration
pub mod error;

/// Tokenizer: Line State, transition handlers, Highlighter trait
pub mod lexer;

/// Line buffer holding text and stored scanner states
pub mod buffer;

/// Incremental rescan driver
pub mod rescan;

/// Code folding: regions, fold tree, fold scan
pub mod folding;

/// Editor facade tying everything together
pub mod editor;

// Re-export commonly needed items
pub use lexer::keywords;

// Re-export foundation types
pub use base::{Attribute, AttributeKind, AttributeRegistry, Position, TextRange, TextSize};

// Re-export the main entry points
pub use buffer::{LineBuffer, LineChange};
pub use editor::{Editor, EditorConfig, TokenAt};
pub use error::{ConfigError, EditError};
pub use folding::{FoldId, FoldRange, FoldRegion, FoldTree};
pub use lexer::{
    CppTokenizer, Highlighter, IndentKind, LineState, ScanMode, SymbolKind, Token, TokenKind,
    TokenType, tokenize_line,
};
pub use rescan::RescanOutcome;
