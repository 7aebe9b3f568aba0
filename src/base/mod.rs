//! Foundation types for the synscan engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`AttributeKind`], [`Attribute`], [`AttributeRegistry`] - Named display categories
//! - [`Position`] - 1-based buffer coordinates (caret, fold lines)
//! - [`TextRange`], [`TextSize`] - Byte offsets inside a line
//!
//! This module has NO dependencies on other synscan modules.

mod attribute;
mod position;

pub use attribute::{Attribute, AttributeKind, AttributeRegistry, FontStyle, Rgb};
pub use position::Position;

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
