//! Spatial data structures for subdivision
//!
//! This module contains:
//! - Rectangles in absolute and root-relative units, with split operations
//! - Leaf records and the collector that numbers them during a run

/// Leaf records, layouts and per-run collection
pub mod layout;
/// Rectangle geometry and splitting
pub mod rectangle;

pub use layout::{Layout, LeafRecord};
pub use rectangle::{RatioRect, Rectangle};
