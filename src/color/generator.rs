//! Random tile colours drawn from a palette with light/dark shading

use crate::color::palette::Palette;
use crate::color::shading::ColorValue;
use crate::io::configuration::{DEFAULT_SHADE_PERCENT, MAX_SHADE_PERCENT};
use crate::io::error::{Result, invalid_parameter};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Fallback when a palette somehow yields no entry
const NEUTRAL_GREY: ColorValue = ColorValue::new(0x80, 0x80, 0x80);

/// Stateless colour source: every call is an independent uniform draw
///
/// Picks a palette entry, then one of its base, darker or lighter variants.
/// Repeats are expected.
#[derive(Debug, Clone)]
pub struct ColorGenerator {
    palette: Palette,
    shade_percent: i32,
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            shade_percent: DEFAULT_SHADE_PERCENT,
        }
    }
}

impl ColorGenerator {
    /// Create a generator over `palette` with the default 10% shading
    pub const fn new(palette: Palette) -> Self {
        Self {
            palette,
            shade_percent: DEFAULT_SHADE_PERCENT,
        }
    }

    /// Override the shading step
    ///
    /// # Errors
    ///
    /// Returns an error if `percent` is outside `[-100, 100]`
    pub fn with_shade_percent(mut self, percent: i32) -> Result<Self> {
        if !(-MAX_SHADE_PERCENT..=MAX_SHADE_PERCENT).contains(&percent) {
            return Err(invalid_parameter(
                "shade_percent",
                &percent,
                &format!("must be within ±{MAX_SHADE_PERCENT}"),
            ));
        }
        self.shade_percent = percent;
        Ok(self)
    }

    /// Palette colours are drawn from
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Shading step in percent
    pub const fn shade_percent(&self) -> i32 {
        self.shade_percent
    }

    /// Draw the next tile colour
    pub fn next_color<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorValue {
        let Some(entry) = self.palette.choose(rng) else {
            return NEUTRAL_GREY;
        };
        entry
            .color
            .variations(self.shade_percent)
            .choose(rng)
            .copied()
            .unwrap_or(entry.color)
    }
}
