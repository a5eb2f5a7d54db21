//! JSON export of finished layouts

use crate::io::error::{MosaicError, Result, WithPath};
use crate::spatial::layout::Layout;
use std::path::Path;

/// Serialize the tiles of `layout` as a pretty-printed JSON array
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn layout_to_json(layout: &Layout, origin: &Path) -> Result<String> {
    serde_json::to_string_pretty(layout.leaves()).map_err(|source| MosaicError::Serialization {
        path: origin.to_path_buf(),
        source,
    })
}

/// Write the tiles of `layout` to `output_path` as a JSON array
///
/// # Errors
///
/// Returns an error if:
/// - Serialization fails
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn export_layout_as_json(layout: &Layout, output_path: &Path) -> Result<()> {
    let json = layout_to_json(layout, output_path)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    std::fs::write(output_path, json).with_path(output_path, "write layout")?;
    log::info!(
        "Wrote {} tiles to {}",
        layout.len(),
        output_path.display()
    );
    Ok(())
}
