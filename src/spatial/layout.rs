//! Leaf records and the per-run collection they are finalized into

use crate::color::shading::ColorValue;
use crate::spatial::rectangle::{RatioRect, Rectangle};
use serde::Serialize;
use std::sync::{Mutex, PoisonError};

/// One finished tile
///
/// Serializes flat as `blockNumber`, `x`, `y`, `width`, `height`, the four
/// ratio fields, `depth` and `color`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafRecord {
    /// Position in finalization order, starting at 1
    #[serde(rename = "blockNumber")]
    pub sequence_number: u64,
    /// Absolute geometry
    #[serde(flatten)]
    pub rect: Rectangle,
    /// Geometry relative to the root of the run
    #[serde(flatten)]
    pub ratio: RatioRect,
    /// Subdivision depth at which the tile stopped splitting
    pub depth: u32,
    /// Shaded palette colour
    pub color: ColorValue,
}

/// Result of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    root: Rectangle,
    leaves: Vec<LeafRecord>,
}

impl Layout {
    /// Region that was tiled
    pub const fn root(&self) -> &Rectangle {
        &self.root
    }

    /// Tiles in sequence-number order
    pub fn leaves(&self) -> &[LeafRecord] {
        &self.leaves
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.leaves.len()
    }

    /// True only for a layout that produced no tiles
    pub const fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Take ownership of the tiles
    pub fn into_leaves(self) -> Vec<LeafRecord> {
        self.leaves
    }

    /// Sum of all tile areas
    pub fn covered_area(&self) -> f64 {
        self.leaves.iter().map(|leaf| leaf.rect.area()).sum()
    }

    /// Deepest level any tile reached
    pub fn max_depth(&self) -> u32 {
        self.leaves.iter().map(|leaf| leaf.depth).max().unwrap_or(0)
    }
}

/// Thread-safe sink that numbers tiles as they are finalized
///
/// The sequence number is allocated under the same lock as the push, so the
/// stored order always matches the numbering.
#[derive(Debug)]
pub struct LeafCollector {
    root: Rectangle,
    leaves: Mutex<Vec<LeafRecord>>,
}

impl LeafCollector {
    /// Start an empty collection for a run over `root`
    pub const fn new(root: Rectangle) -> Self {
        Self {
            root,
            leaves: Mutex::new(Vec::new()),
        }
    }

    /// Record a finished tile and return its sequence number
    pub fn finalize(&self, rect: Rectangle, depth: u32, color: ColorValue) -> u64 {
        let mut leaves = self.leaves.lock().unwrap_or_else(PoisonError::into_inner);
        let sequence_number = leaves.len() as u64 + 1;
        leaves.push(LeafRecord {
            sequence_number,
            rect,
            ratio: rect.to_ratio(&self.root),
            depth,
            color,
        });
        sequence_number
    }

    /// Close the run and hand back its layout
    pub fn into_layout(self) -> Layout {
        Layout {
            root: self.root,
            leaves: self
                .leaves
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner),
        }
    }
}
