//! Colour generation for mosaic tiles

/// Random per-tile colour selection with shading
pub mod generator;
/// Named base colour sets
pub mod palette;
/// 24-bit colour values and percentage shading
pub mod shading;
