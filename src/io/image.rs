//! PNG preview of a layout with faint tile borders and optional tile numbers

use crate::color::shading::ColorValue;
use crate::io::configuration::{BORDER_OPACITY, BORDER_WIDTH, LABEL_INSET, LABEL_SCALE};
use crate::io::error::{MosaicError, Result, WithPath};
use crate::spatial::layout::{Layout, LeafRecord};
use ab_glyph::FontRef;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::Path;

static LABEL_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSansMono-Bold.ttf");

const LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Pixel span `[start, end)` whose centres fall inside `[min, max)`
fn pixel_span(min: f64, max: f64, limit: u32) -> (u32, u32) {
    let clamp = |edge: f64| (edge - 0.5).ceil().clamp(0.0, f64::from(limit)) as u32;
    (clamp(min), clamp(max))
}

// Blend toward black the way a translucent border sits over the tile
fn border_shade(color: ColorValue) -> Rgb<u8> {
    let darken = |channel: u8| (f64::from(channel) * (1.0 - BORDER_OPACITY)).round() as u8;
    Rgb([darken(color.r), darken(color.g), darken(color.b)])
}

/// Pixel bounds `(x0, x1, y0, y1)` of `leaf`, or `None` if it covers no pixel
fn leaf_pixels(img: &RgbImage, leaf: &LeafRecord, origin: (f64, f64)) -> Option<[u32; 4]> {
    let rect = &leaf.rect;
    let (x0, x1) = pixel_span(rect.x - origin.0, rect.right() - origin.0, img.width());
    let (y0, y1) = pixel_span(rect.y - origin.1, rect.bottom() - origin.1, img.height());
    (x0 < x1 && y0 < y1).then_some([x0, x1, y0, y1])
}

fn paint_leaf(img: &mut RgbImage, leaf: &LeafRecord, origin: (f64, f64)) {
    let Some([x0, x1, y0, y1]) = leaf_pixels(img, leaf, origin) else {
        return;
    };

    let fill = Rgb::from(leaf.color);
    let border = border_shade(leaf.color);
    for py in y0..y1 {
        for px in x0..x1 {
            let on_border = px < x0 + BORDER_WIDTH
                || px + BORDER_WIDTH >= x1
                || py < y0 + BORDER_WIDTH
                || py + BORDER_WIDTH >= y1;
            img.put_pixel(px, py, if on_border { border } else { fill });
        }
    }
}

// Labels that would not fit inside their tile are skipped
fn label_leaf(img: &mut RgbImage, leaf: &LeafRecord, origin: (f64, f64), font: &FontRef<'_>) {
    let Some([x0, x1, y0, y1]) = leaf_pixels(img, leaf, origin) else {
        return;
    };
    let text = leaf.sequence_number.to_string();
    let (text_width, text_height) = text_size(LABEL_SCALE, font, &text);

    let x = x0 + LABEL_INSET;
    let y = y0 + LABEL_INSET;
    if x + text_width > x1 || y + text_height > y1 {
        return;
    }
    let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
        return;
    };
    draw_text_mut(img, LABEL_COLOR, x, y, LABEL_SCALE, font, &text);
}

/// Rasterize `layout` at one pixel per unit
///
/// Each pixel takes the colour of the tile containing its centre. Tiles
/// too thin to contain a pixel centre leave no mark. With `numbered`, each
/// tile large enough to hold it gets its sequence number near the top-left
/// corner.
///
/// # Errors
///
/// Returns an error if the root covers no pixels or the label font fails to load
pub fn render_layout(layout: &Layout, numbered: bool) -> Result<RgbImage> {
    let root = layout.root();
    let width = root.width.ceil() as u32;
    let height = root.height.ceil() as u32;
    if width == 0 || height == 0 {
        return Err(MosaicError::InvalidParameter {
            parameter: "root",
            value: format!("{}x{}", root.width, root.height),
            reason: "cannot render an empty region".to_string(),
        });
    }

    let origin = (root.x, root.y);
    let mut img = RgbImage::new(width, height);
    for leaf in layout.leaves() {
        paint_leaf(&mut img, leaf, origin);
    }

    if numbered {
        let font =
            FontRef::try_from_slice(LABEL_FONT).map_err(|source| MosaicError::LabelFont { source })?;
        for leaf in layout.leaves() {
            label_leaf(&mut img, leaf, origin, &font);
        }
    }
    Ok(img)
}

/// Render `layout` and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The root covers no pixels or the label font fails to load
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_as_png(layout: &Layout, output_path: &Path, numbered: bool) -> Result<()> {
    let img = render_layout(layout, numbered)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|source| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })?;
    log::info!("Rendered preview to {}", output_path.display());
    Ok(())
}
