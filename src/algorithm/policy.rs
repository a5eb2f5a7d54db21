//! Termination policy and split strategies for recursive subdivision

use crate::io::configuration::{
    BINARY_SPLIT_RATIOS, DEFAULT_MAX_DEPTH, DEFAULT_MIN_SIZE, QUAD_SPLIT_DIVISORS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::rectangle::Rectangle;

/// Bounds that decide when a rectangle stops splitting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPolicy {
    /// Rectangles with either side below this become tiles
    pub min_size: f64,
    /// Rectangles at this depth become tiles
    pub max_depth: u32,
}

impl Default for SplitPolicy {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SplitPolicy {
    /// Create a policy
    pub const fn new(min_size: f64, max_depth: u32) -> Self {
        Self {
            min_size,
            max_depth,
        }
    }

    /// Reject policies that could not terminate
    ///
    /// Depth is bounded together with the split strategy, see
    /// [`crate::algorithm::executor::GenerationConfig::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if `min_size` is not a positive finite number
    pub fn validate(&self) -> Result<()> {
        if !(self.min_size.is_finite() && self.min_size > 0.0) {
            return Err(invalid_parameter(
                "min_size",
                &self.min_size,
                &"must be a positive finite number",
            ));
        }
        Ok(())
    }

    /// Tiles produced if every rectangle splits until `max_depth`
    ///
    /// `None` when the count does not fit in a `u64`.
    pub const fn worst_case_leaves(&self, strategy: &SplitStrategy) -> Option<u64> {
        (strategy.fan_out() as u64).checked_pow(self.max_depth)
    }

    /// Whether `rect` at `depth` is finalized instead of split
    ///
    /// Degenerate rectangles are always leaves, whatever the size test says.
    pub fn is_leaf(&self, rect: &Rectangle, depth: u32) -> bool {
        rect.is_degenerate()
            || rect.width < self.min_size
            || rect.height < self.min_size
            || depth >= self.max_depth
    }
}

/// Aspect pair dividing the split axis into `x : y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRatio {
    /// Share of the horizontal cut
    pub x: u32,
    /// Share of the vertical cut
    pub y: u32,
}

impl SplitRatio {
    /// Create a ratio
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Fraction of the height given to the top child of a vertical split
    pub fn vertical_fraction(self) -> f64 {
        f64::from(self.y) / (f64::from(self.x) + f64::from(self.y))
    }

    /// Fraction of the width given to the left child of a horizontal split
    pub fn horizontal_fraction(self) -> f64 {
        f64::from(self.x) / (f64::from(self.x) + f64::from(self.y))
    }
}

/// How a rectangle is cut at each recursive step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Two children along a randomly chosen axis
    Binary {
        /// Candidate ratios, picked uniformly
        ratios: Vec<SplitRatio>,
    },
    /// Four children around a corner cell of `width/d × height/d`
    Quad {
        /// Candidate divisors, picked uniformly
        divisors: Vec<u32>,
    },
}

impl Default for SplitStrategy {
    fn default() -> Self {
        Self::binary()
    }
}

impl SplitStrategy {
    /// Binary splits with the square/wide/tall ratio set
    pub fn binary() -> Self {
        Self::Binary {
            ratios: BINARY_SPLIT_RATIOS
                .iter()
                .map(|&(x, y)| SplitRatio::new(x, y))
                .collect(),
        }
    }

    /// Quad splits with the 2/3/5/8 divisor set
    pub fn quad() -> Self {
        Self::Quad {
            divisors: QUAD_SPLIT_DIVISORS.to_vec(),
        }
    }

    /// Number of children each split produces
    pub const fn fan_out(&self) -> usize {
        match self {
            Self::Binary { .. } => 2,
            Self::Quad { .. } => 4,
        }
    }

    /// Reject empty candidate sets and ratios that cannot divide a rectangle
    ///
    /// # Errors
    ///
    /// Returns an error if the candidate set is empty, a ratio has a zero
    /// component, or a divisor is below 2
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Binary { ratios } => {
                if ratios.is_empty() {
                    return Err(invalid_parameter(
                        "ratios",
                        &"[]",
                        &"at least one split ratio is required",
                    ));
                }
                if let Some(bad) = ratios.iter().find(|r| r.x == 0 || r.y == 0) {
                    return Err(invalid_parameter(
                        "ratios",
                        &format!("{}:{}", bad.x, bad.y),
                        &"both ratio components must be positive",
                    ));
                }
            }
            Self::Quad { divisors } => {
                if divisors.is_empty() {
                    return Err(invalid_parameter(
                        "divisors",
                        &"[]",
                        &"at least one divisor is required",
                    ));
                }
                if let Some(bad) = divisors.iter().find(|&&d| d < 2) {
                    return Err(invalid_parameter(
                        "divisors",
                        bad,
                        &"divisors must be at least 2",
                    ));
                }
            }
        }
        Ok(())
    }
}
