//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tilehash::TilehashError;
    use tilehash::io::error::invalid_parameter;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = TilehashError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.png"));
    }

    // Tests validation errors carry no source
    // Verified by returning a source for every variant
    #[test]
    fn test_validation_errors_have_no_source() {
        let error = TilehashError::InvalidTileCount { value: 0 };
        assert!(error.source().is_none());
    }

    // Tests unhashable error mentions the seeds tried
    // Verified by omitting attempts from message
    #[test]
    fn test_unhashable_error() {
        let message = TilehashError::Unhashable { attempts: 256 }.to_string();
        assert!(message.contains("256"));
        assert!(message.contains("unhashable"));
    }

    // Tests length error reports request and limit
    // Verified by omitting the requested length
    #[test]
    fn test_length_exceeded_error() {
        let message = TilehashError::LengthExceeded {
            requested: 67,
            max: 64,
        }
        .to_string();
        assert!(message.contains("67"));
        assert!(message.contains("64"));
    }

    // Tests color errors echo the offending input
    // Verified by omitting the value from the message
    #[test]
    fn test_color_errors() {
        let hex = TilehashError::InvalidHexColor {
            value: "FF00".to_string(),
        };
        assert!(hex.to_string().contains("FF00"));

        let index = TilehashError::ColorIndexOutOfRange {
            index: 2,
            available: 2,
        };
        assert!(index.to_string().contains("index 2"));

        let bytes = TilehashError::InvalidColorBytes { len: 1 };
        assert!(bytes.to_string().contains("got 1"));
    }

    // Tests InvalidParameter helper fills all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("tile_size", &-1, &"must be positive").to_string();
        assert!(message.contains("tile_size"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = TilehashError::ImageExport {
            path: "/restricted/output.png".into(),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }
}
