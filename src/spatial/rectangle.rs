//! Axis-aligned rectangles in absolute and root-relative units
//!
//! Splits always produce children that exactly cover their parent: the
//! second child of every cut is sized from the remainder rather than from
//! the ratio, so rounding never opens a gap between siblings.

use serde::Serialize;

/// Rectangle in absolute pixel units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin
    pub const fn with_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Covered area (zero for degenerate rectangles)
    pub fn area(&self) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            self.width * self.height
        }
    }

    /// True when either side is zero, negative or not a number
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Area shared with `other`
    pub fn intersection_area(&self, other: &Self) -> f64 {
        let overlap_w = self.right().min(other.right()) - self.x.max(other.x);
        let overlap_h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if overlap_w > 0.0 && overlap_h > 0.0 {
            overlap_w * overlap_h
        } else {
            0.0
        }
    }

    /// Check that `other` lies inside this rectangle, allowing `tolerance` at each edge
    pub fn contains(&self, other: &Self, tolerance: f64) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }

    /// Cut into a top and a bottom part; the top receives `fraction` of the height
    pub fn split_vertical(&self, fraction: f64) -> [Self; 2] {
        let top_height = self.height * fraction;
        [
            Self::new(self.x, self.y, self.width, top_height),
            Self::new(
                self.x,
                self.y + top_height,
                self.width,
                self.height - top_height,
            ),
        ]
    }

    /// Cut into a left and a right part; the left receives `fraction` of the width
    pub fn split_horizontal(&self, fraction: f64) -> [Self; 2] {
        let left_width = self.width * fraction;
        [
            Self::new(self.x, self.y, left_width, self.height),
            Self::new(
                self.x + left_width,
                self.y,
                self.width - left_width,
                self.height,
            ),
        ]
    }

    /// Cut into four cells around a top-left corner of `width/divisor × height/divisor`
    ///
    /// Order: corner, top-right, bottom-left, bottom-right.
    pub fn split_corner(&self, divisor: f64) -> [Self; 4] {
        let corner_w = self.width / divisor;
        let corner_h = self.height / divisor;
        let rest_w = self.width - corner_w;
        let rest_h = self.height - corner_h;
        [
            Self::new(self.x, self.y, corner_w, corner_h),
            Self::new(self.x + corner_w, self.y, rest_w, corner_h),
            Self::new(self.x, self.y + corner_h, corner_w, rest_h),
            Self::new(self.x + corner_w, self.y + corner_h, rest_w, rest_h),
        ]
    }

    /// Express this rectangle as fractions of `root`
    pub fn to_ratio(&self, root: &Self) -> RatioRect {
        RatioRect {
            x_ratio: fraction_of(self.x - root.x, root.width),
            y_ratio: fraction_of(self.y - root.y, root.height),
            width_ratio: fraction_of(self.width, root.width),
            height_ratio: fraction_of(self.height, root.height),
        }
    }
}

// A collapsed root axis maps everything on it to zero instead of NaN/inf
fn fraction_of(value: f64, extent: f64) -> f64 {
    if extent > 0.0 { value / extent } else { 0.0 }
}

/// Rectangle geometry relative to the root of a run, each field in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioRect {
    /// Left edge as a fraction of root width
    pub x_ratio: f64,
    /// Top edge as a fraction of root height
    pub y_ratio: f64,
    /// Width as a fraction of root width
    pub width_ratio: f64,
    /// Height as a fraction of root height
    pub height_ratio: f64,
}
