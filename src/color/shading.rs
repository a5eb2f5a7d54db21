//! 24-bit colours and percentage shading toward black or white

use crate::io::error::{MosaicError, invalid_palette};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Full channel range that 100% shading spans
const CHANNEL_RANGE: i32 = 255;

/// RGB colour with 8 bits per channel, written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ColorValue {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl ColorValue {
    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack the low 24 bits of `value` as `0xRRGGBB`
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Pack as `0xRRGGBB`
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Channels in RGB order
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Move every channel by `round(2.55 * percent)`, clamping to `[0, 255]`
    ///
    /// Negative percentages darken, positive ones lighten. Halves round away
    /// from zero so that darkening and lightening by the same percent move
    /// channels by the same amount.
    pub fn shade(self, percent: i32) -> Self {
        // Integer form of round(2.55 * percent); truncating division after
        // adding half the divisor with the sign of the numerator
        let percent = percent.clamp(-100, 100);
        let amount = (CHANNEL_RANGE * percent + 50 * percent.signum()) / 100;
        let adjust = |channel: u8| (i32::from(channel) + amount).clamp(0, 255) as u8;
        Self {
            r: adjust(self.r),
            g: adjust(self.g),
            b: adjust(self.b),
        }
    }

    /// Base colour followed by its darker and lighter variants
    pub fn variations(self, percent: i32) -> [Self; 3] {
        [self, self.shade(-percent), self.shade(percent)]
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for ColorValue {
    type Err = MosaicError;

    /// Parse `#RRGGBB` or `RRGGBB` (either case)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_palette(&format!(
                "'{s}' is not a #RRGGBB colour"
            )));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|e| invalid_palette(&format!("'{s}': {e}")))
    }
}

impl From<ColorValue> for String {
    fn from(color: ColorValue) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for ColorValue {
    type Error = MosaicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorValue> for image::Rgb<u8> {
    fn from(color: ColorValue) -> Self {
        Self(color.channels())
    }
}
