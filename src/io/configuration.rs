//! Generation constants and runtime configuration defaults

// Subdivision policy defaults
/// Smallest rectangle side that may still be split (pixels)
pub const DEFAULT_MIN_SIZE: f64 = 100.0;
/// Deepest subdivision level before every rectangle becomes a tile
pub const DEFAULT_MAX_DEPTH: u32 = 3;

// Root region defaults
/// Width of the region to tile when none is given (pixels)
pub const DEFAULT_ROOT_WIDTH: f64 = 1920.0;
/// Height of the region to tile when none is given (pixels)
pub const DEFAULT_ROOT_HEIGHT: f64 = 1080.0;

/// Binary split aspect pairs (x, y): square, wide, tall
pub const BINARY_SPLIT_RATIOS: [(u32, u32); 3] = [(1, 1), (2, 1), (1, 2)];
/// Divisors used to size the corner cell of a quad split
pub const QUAD_SPLIT_DIVISORS: [u32; 4] = [2, 3, 5, 8];

/// Percentage each channel is moved for the darker and lighter variants
pub const DEFAULT_SHADE_PERCENT: i32 = 10;
/// Shading beyond this magnitude saturates every channel
pub const MAX_SHADE_PERCENT: i32 = 100;

// Safety limits to prevent runaway trees and allocations
/// Maximum allowed root dimension (pixels)
pub const MAX_ROOT_DIMENSION: f64 = 10_000.0;
/// Largest tile count a configuration may produce in the worst case
///
/// Bounds `fan_out ^ max_depth`: depth 20 for binary splits, 10 for quad splits.
pub const MAX_LEAVES: u64 = 1 << 20;

/// Depth below which parallel mode stops fanning subtrees out to the thread pool
pub const PARALLEL_FAN_OUT_DEPTH: u32 = 8;

/// Number of layouts generated per invocation
pub const DEFAULT_VARIANT_COUNT: usize = 1;

// Output settings
/// File stem for exported layouts
pub const DEFAULT_OUTPUT_NAME: &str = "layout";
/// Extension of the exported layout document
pub const LAYOUT_EXTENSION: &str = "json";
/// Extension of the rendered preview
pub const RENDER_EXTENSION: &str = "png";

// Tile border in rendered previews
/// Border thickness (pixels)
pub const BORDER_WIDTH: u32 = 1;
/// Opacity of the black border blended over the tile colour
pub const BORDER_OPACITY: f64 = 0.03;

// Sequence-number labels in rendered previews
/// Label glyph height (pixels)
pub const LABEL_SCALE: f32 = 12.0;
/// Offset of the label from the top-left corner of its tile (pixels)
pub const LABEL_INSET: u32 = 5;
