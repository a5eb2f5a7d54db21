//! Procedural mosaics built by randomized recursive subdivision
//!
//! A root rectangle is split again and again by randomly chosen ratios until
//! a minimum size or maximum depth stops it. Every resulting tile is painted
//! with a lighter, darker or unmodified colour drawn from a neutral palette.

#![forbid(unsafe_code)]

/// Subdivision policy, recursive engine and layout generation
pub mod algorithm;
/// Palette, shading and per-tile colour selection
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Rectangles and leaf records
pub mod spatial;

pub use algorithm::executor::{GenerationConfig, LayoutGenerator, generate_layout};
pub use io::error::{MosaicError, Result};
