//! Tests for the default palette, custom palette loading and uniform picks

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use tilemosaic::MosaicError;
    use tilemosaic::color::palette::{NamedColor, Palette};
    use tilemosaic::color::shading::ColorValue;

    // Tests the default palette carries the whites, neutrals and greys
    #[test]
    fn test_default_palette_contents() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 22);
        assert!(!palette.is_empty());

        let first = palette.entries().first().cloned();
        assert_eq!(first, Some(NamedColor::new("Cardboard", 0xF9F9F7)));
        let last = palette.entries().last().cloned();
        assert_eq!(last, Some(NamedColor::new("Wooden Boat", 0xB8BFAC)));
    }

    // Tests empty palettes are rejected
    // Verified by removing the emptiness check
    #[test]
    fn test_new_rejects_empty() {
        let result = Palette::new(Vec::new());
        assert!(matches!(result, Err(MosaicError::InvalidPalette { .. })));
    }

    // Tests JSON parsing of {name, hex} entries
    #[test]
    fn test_from_json_str() {
        let json = r##"[
            {"name": "Milk", "hex": "#FFFFE5"},
            {"name": "Oyster 3", "hex": "#999b89"}
        ]"##;
        let palette = Palette::from_json_str(json, Path::new("inline.json"));
        let palette = palette.unwrap_or_else(|e| unreachable!("valid palette rejected: {e}"));

        assert_eq!(palette.len(), 2);
        let colors: Vec<ColorValue> = palette.entries().iter().map(|e| e.color).collect();
        assert_eq!(
            colors,
            vec![ColorValue::from_u32(0xFFFFE5), ColorValue::from_u32(0x999B89)]
        );
    }

    // Tests malformed colours and empty arrays fail to parse
    #[test]
    fn test_from_json_str_rejects_invalid() {
        let origin = Path::new("bad.json");
        let bad_hex = r#"[{"name": "Mud", "hex": "brown"}]"#;
        assert!(matches!(
            Palette::from_json_str(bad_hex, origin),
            Err(MosaicError::Serialization { .. })
        ));

        assert!(matches!(
            Palette::from_json_str("[]", origin),
            Err(MosaicError::InvalidPalette { .. })
        ));
    }

    // Tests loading a palette file from disk and reporting missing files
    #[test]
    fn test_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("palette.json");
        fs::write(&path, r##"[{"name": "Linen", "hex": "#FBFBF4"}]"##).unwrap();

        let palette = Palette::from_json_file(&path).unwrap();
        assert_eq!(palette.len(), 1);

        let missing = Palette::from_json_file(&temp_dir.path().join("missing.json"));
        assert!(matches!(missing, Err(MosaicError::FileSystem { .. })));
    }

    // Tests choose eventually returns every entry
    // Verified by always returning the first entry
    #[test]
    fn test_choose_reaches_every_entry() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            if let Some(entry) = palette.choose(&mut rng) {
                seen.insert(entry.name.clone());
            }
        }
        assert_eq!(seen.len(), palette.len());
    }
}
