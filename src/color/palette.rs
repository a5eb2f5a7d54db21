//! Named base colours that tiles are painted from
//!
//! The default set groups whites, neutrals and greys, but selection treats
//! every entry alike. Custom palettes load from a JSON array of
//! `{"name": ..., "hex": "#RRGGBB"}` objects.

use crate::color::shading::ColorValue;
use crate::io::error::{MosaicError, Result, WithPath, invalid_palette};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A palette entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    /// Display name of the paint
    pub name: String,
    /// Base colour before shading
    #[serde(rename = "hex")]
    pub color: ColorValue,
}

impl NamedColor {
    /// Create an entry from a name and packed `0xRRGGBB` value
    pub fn new(name: &str, rgb: u32) -> Self {
        Self {
            name: name.to_string(),
            color: ColorValue::from_u32(rgb),
        }
    }
}

const DEFAULT_ENTRIES: [(&str, u32); 22] = [
    // Whites
    ("Cardboard", 0xF9F9F7),
    ("Estate", 0xFAFAFA),
    ("Ice", 0xF9F9F7),
    ("Perfumed Letter", 0xF7F5F5),
    ("Gimlet", 0xF7F7F7),
    ("Frost", 0xF7F7F5),
    ("Confident", 0xFFFFFD),
    ("Testament", 0xF9F9F2),
    // Neutrals
    ("GoatMilk", 0xFFFEF5),
    ("Ivory", 0xFCFBF2),
    ("Book", 0xF9F7E8),
    ("Document", 0xFFFFFA),
    ("Parchment", 0xFFFADF),
    ("Linen", 0xFBFBF4),
    ("Milk", 0xFFFFE5),
    ("Creamcheese", 0xF9F8D4),
    // Greys
    ("Milan II", 0xDFE2CF),
    ("Venician Coat", 0xC1BBA0),
    ("Old Flag", 0xC1BEA4),
    ("Oyster 2", 0xBAB5A0),
    ("Oyster 3", 0x999B89),
    ("Wooden Boat", 0xB8BFAC),
];

/// Non-empty, immutable list of base colours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<NamedColor>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|&(name, rgb)| NamedColor::new(name, rgb))
                .collect(),
        }
    }
}

impl Palette {
    /// Build a palette from explicit entries
    ///
    /// # Errors
    ///
    /// Returns an error if `entries` is empty
    pub fn new(entries: Vec<NamedColor>) -> Result<Self> {
        if entries.is_empty() {
            return Err(invalid_palette(&"palette must contain at least one colour"));
        }
        Ok(Self { entries })
    }

    /// Parse a palette from a JSON array of `{name, hex}` objects
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed, a colour is not
    /// `#RRGGBB`, or the array is empty
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self> {
        let entries: Vec<NamedColor> =
            serde_json::from_str(json).map_err(|source| MosaicError::Serialization {
                path: origin.to_path_buf(),
                source,
            })?;
        Self::new(entries)
    }

    /// Load a palette file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid palette
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).with_path(path, "read palette")?;
        let palette = Self::from_json_str(&json, path)?;
        log::info!(
            "Loaded {} palette colours from {}",
            palette.len(),
            path.display()
        );
        Ok(palette)
    }

    /// Uniformly pick one entry
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&NamedColor> {
        self.entries.choose(rng)
    }

    /// All entries in declaration order
    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed palette
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
