//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use mapcolor::io::error::{WithPath, invalid_parameter};
    use mapcolor::MapColorError;
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MapColorError::FileSystem {
            path: "/tmp/basins.txt".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    // Tests PaletteExhausted names the region and palette size
    // Verified by omitting the region from the message
    #[test]
    fn test_palette_exhausted_message() {
        let error = MapColorError::PaletteExhausted {
            node: "17".to_string(),
            palette_size: 4,
            colored_neighbors: 5,
        };

        let message = error.to_string();
        assert!(message.contains("region 17"));
        assert!(message.contains("4 colors"));
        assert!(message.contains("5 colored neighbors"));
        assert!(error.source().is_none());
    }

    // Tests RasterParse reports the line number
    // Verified by omitting the line from the message
    #[test]
    fn test_raster_parse_message() {
        let error = MapColorError::RasterParse {
            path: PathBuf::from("grid.txt"),
            line: 12,
            reason: "'x' is not a finite number".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("grid.txt"));
        assert!(message.contains("line 12"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("scale", &0, &"must be at least 1");

        let message = error.to_string();
        assert!(message.contains("scale"));
        assert!(message.contains('0'));
        assert!(message.contains("must be at least 1"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = MapColorError::ImageExport {
            path: PathBuf::from("/readonly/out_map.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("out_map.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests I/O conversion marks the path unknown until context is attached
    // Verified by dropping the path in with_path
    #[test]
    fn test_with_path_context() {
        let failed: std::io::Result<()> = Err(std::io::Error::other("disk full"));
        match failed.with_path(Path::new("out.cpt"), "write color table") {
            Err(MapColorError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, PathBuf::from("out.cpt"));
                assert_eq!(operation, "write color table");
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }

        let converted = MapColorError::from(std::io::Error::other("closed"));
        assert!(converted.to_string().contains("<unknown>"));
    }

    // Tests non-I/O errors pass through with_path unchanged
    // Verified by wrapping every error as FileSystem
    #[test]
    fn test_with_path_passthrough() {
        let failed: Result<(), MapColorError> = Err(MapColorError::InvalidRaster {
            reason: "empty".to_string(),
        });
        assert!(matches!(
            failed.with_path(Path::new("a.txt"), "read raster"),
            Err(MapColorError::InvalidRaster { .. })
        ));
    }
}
