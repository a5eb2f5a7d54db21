//! Tests for uniform palette draws with base, darker and lighter variants

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use tilemosaic::MosaicError;
    use tilemosaic::color::generator::ColorGenerator;
    use tilemosaic::color::palette::{NamedColor, Palette};
    use tilemosaic::color::shading::ColorValue;

    fn single_entry_palette(rgb: u32) -> Palette {
        Palette::new(vec![NamedColor::new("Only", rgb)])
            .unwrap_or_else(|e| unreachable!("non-empty palette rejected: {e}"))
    }

    // Tests a single-entry palette yields exactly its three variants
    // Verified by dropping the lighter variant
    #[test]
    fn test_next_color_produces_three_variants() {
        let colors = ColorGenerator::new(single_entry_palette(0x808080));
        let mut rng = StdRng::seed_from_u64(11);

        let seen: HashSet<ColorValue> = (0..300).map(|_| colors.next_color(&mut rng)).collect();
        let expected: HashSet<ColorValue> = [0x808080, 0x666666, 0x9A9A9A]
            .into_iter()
            .map(ColorValue::from_u32)
            .collect();
        assert_eq!(seen, expected);
    }

    // Tests every drawn colour is a shade of some palette entry
    #[test]
    fn test_next_color_stays_within_palette_shades() {
        let colors = ColorGenerator::default();
        let allowed: HashSet<ColorValue> = colors
            .palette()
            .entries()
            .iter()
            .flat_map(|entry| entry.color.variations(colors.shade_percent()))
            .collect();

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            assert!(allowed.contains(&colors.next_color(&mut rng)));
        }
    }

    // Tests draws are repeatable under the same seed
    #[test]
    fn test_next_color_deterministic_for_seed() {
        let colors = ColorGenerator::default();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..50)
                .map(|_| colors.next_color(&mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(99), draw(99));
    }

    // Tests shade percent validation bounds
    #[test]
    fn test_with_shade_percent() {
        let colors = ColorGenerator::default().with_shade_percent(25);
        assert_eq!(colors.map(|c| c.shade_percent()).ok(), Some(25));

        let too_far = ColorGenerator::default().with_shade_percent(101);
        assert!(matches!(
            too_far,
            Err(MosaicError::InvalidParameter {
                parameter: "shade_percent",
                ..
            })
        ));
    }

    // Tests zero shading collapses the variants onto the base colour
    #[test]
    fn test_zero_shade_returns_base() {
        let colors = ColorGenerator::new(single_entry_palette(0xC1BEA4))
            .with_shade_percent(0)
            .unwrap_or_else(|e| unreachable!("zero shading rejected: {e}"));
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(colors.next_color(&mut rng), ColorValue::from_u32(0xC1BEA4));
        }
    }
}
