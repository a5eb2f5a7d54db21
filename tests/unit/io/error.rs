//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};
    use tilemosaic::MosaicError;
    use tilemosaic::io::error::{WithPath, invalid_palette, invalid_parameter};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MosaicError::FileSystem {
            path: "/tmp/layout.json".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(invalid_palette(&"empty").source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("min_size", &-1, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("min_size"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
        assert!(error.source().is_none());
    }

    // Tests InvalidPalette error formatting
    #[test]
    fn test_invalid_palette_error() {
        let message = invalid_palette(&"'#XYZ' is not a #RRGGBB colour").to_string();
        assert!(message.starts_with("Invalid palette"));
        assert!(message.contains("#XYZ"));
    }

    // Tests Serialization error names the document and chains the JSON error
    #[test]
    fn test_serialization_error() {
        let json_error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let error = MosaicError::Serialization {
            path: PathBuf::from("palette.json"),
            source: json_error,
        };

        assert!(error.to_string().contains("palette.json"));
        assert!(error.source().is_some());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = MosaicError::ImageExport {
            path: PathBuf::from("/restricted/layout.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/layout.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests font errors keep their cause
    #[test]
    fn test_label_font_error() {
        let Err(source) = ab_glyph::FontRef::try_from_slice(b"not a font") else {
            unreachable!("garbage parsed as a font");
        };
        let error = MosaicError::LabelFont { source };

        assert!(error.to_string().starts_with("Failed to load label font"));
        assert!(error.source().is_some());
    }

    // Tests with_path attaches the path and operation to raw I/O errors
    // Verified by dropping the operation from the converted error
    #[test]
    fn test_with_path_conversion() {
        let raw: std::io::Result<()> = Err(std::io::Error::other("disk full"));
        let result = raw.with_path(Path::new("out/layout.json"), "write layout");

        match result {
            Err(MosaicError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, PathBuf::from("out/layout.json"));
                assert_eq!(operation, "write layout");
            }
            _ => unreachable!("Expected FileSystem error type"),
        }

        let ok: std::io::Result<u8> = Ok(3);
        assert_eq!(ok.with_path(Path::new("x"), "read").ok(), Some(3));
    }
}
