//! Code folding.
//!
//! This module provides:
//! - [`FoldRegion`] - Open/close delimiter pair plus the attribute it must carry
//! - [`FoldTree`], [`FoldRange`], [`FoldId`] - Arena of collapsible line spans
//! - [`scan_for_fold_ranges`] - Full scan building a fresh tree
//! - [`rescan_for_fold_ranges`] - Rebuild that keeps collapsed ranges
//!
//! Line numbers here are 1-based, matching the gutter.

mod region;
mod scan;
mod tree;

pub use region::FoldRegion;
pub use scan::{rescan_for_fold_ranges, scan_for_fold_ranges};
pub use tree::{FoldId, FoldRange, FoldTree};
