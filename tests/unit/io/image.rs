//! Tests for PNG rendering of layouts including borders and error handling

#[cfg(test)]
mod tests {
    use image::Rgb;
    use std::path::Path;
    use tempfile::TempDir;
    use tilemosaic::color::shading::ColorValue;
    use tilemosaic::io::image::{export_layout_as_png, render_layout};
    use tilemosaic::spatial::layout::{Layout, LeafCollector};
    use tilemosaic::spatial::rectangle::Rectangle;

    const RED: ColorValue = ColorValue::new(200, 0, 0);
    const GREEN: ColorValue = ColorValue::new(0, 200, 0);

    fn split_layout() -> Layout {
        let root = Rectangle::with_size(20.0, 10.0);
        let collector = LeafCollector::new(root);
        let [left, right] = root.split_horizontal(0.5);
        collector.finalize(left, 1, RED);
        collector.finalize(right, 1, GREEN);
        collector.into_layout()
    }

    // Tests tile interiors take the tile colour and halves meet at the split
    // Verified by painting pixels from the wrong tile
    #[test]
    fn test_render_layout_fills_tiles() {
        let img = render_layout(&split_layout(), false).unwrap();

        assert_eq!(img.dimensions(), (20, 10));
        assert_eq!(*img.get_pixel(4, 5), Rgb([200, 0, 0]));
        assert_eq!(*img.get_pixel(15, 5), Rgb([0, 200, 0]));
    }

    // Tests tile edges are darkened slightly for the border
    #[test]
    fn test_render_layout_draws_borders() {
        let img = render_layout(&split_layout(), false).unwrap();

        assert_eq!(*img.get_pixel(0, 0), Rgb([194, 0, 0]));
        assert_eq!(*img.get_pixel(9, 5), Rgb([194, 0, 0]));
        assert_eq!(*img.get_pixel(10, 5), Rgb([0, 194, 0]));
    }

    fn single_tile_layout(width: f64, height: f64) -> Layout {
        let root = Rectangle::with_size(width, height);
        let collector = LeafCollector::new(root);
        collector.finalize(root, 0, ColorValue::new(240, 240, 240));
        collector.into_layout()
    }

    // Tests numbering draws dark glyph pixels near the top-left of the tile only
    // Verified by drawing labels at the image origin instead of the tile origin
    #[test]
    fn test_render_layout_numbers_tiles() {
        let layout = single_tile_layout(200.0, 100.0);
        let plain = render_layout(&layout, false).unwrap();
        let numbered = render_layout(&layout, true).unwrap();

        let changed: Vec<(u32, u32)> = plain
            .enumerate_pixels()
            .filter(|&(x, y, pixel)| numbered.get_pixel(x, y) != pixel)
            .map(|(x, y, _)| (x, y))
            .collect();

        assert!(!changed.is_empty(), "label left no mark");
        assert!(changed.iter().all(|&(x, y)| (5..40).contains(&x) && (5..30).contains(&y)));
        assert!(changed.iter().any(|&(x, y)| numbered.get_pixel(x, y)[0] < 128));
        assert_eq!(numbered.get_pixel(150, 70), plain.get_pixel(150, 70));
    }

    // Tests labels that would overflow a small tile are skipped
    #[test]
    fn test_render_layout_skips_labels_that_do_not_fit() {
        let tiny = single_tile_layout(8.0, 8.0);
        assert_eq!(
            render_layout(&tiny, true).unwrap(),
            render_layout(&tiny, false).unwrap()
        );
    }

    // Tests rendering an empty region is rejected
    #[test]
    fn test_render_layout_empty_root() {
        let layout = LeafCollector::new(Rectangle::with_size(0.0, 10.0)).into_layout();
        assert!(render_layout(&layout, false).is_err());
        assert!(render_layout(&layout, true).is_err());
    }

    // Tests PNG file creation
    // Verified by disabling file save operation
    #[test]
    fn test_export_layout_as_png_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("previews").join("layout.png");

        export_layout_as_png(&split_layout(), &output_path, true).unwrap();

        assert!(Path::new(&output_path).exists());
        let reloaded = image::open(&output_path).unwrap().to_rgb8();
        assert_eq!(reloaded.dimensions(), (20, 10));
    }
}
