use std::path::PathBuf;

/// Failure conditions surfaced at the boundary of each conversion
/// operation.
///
/// Adapter errors (codec, container) are carried as strings; shells only
/// display them. An empty input folder is *not* an error — see
/// `BuildOutcome::NoImages`.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not open video {}: {reason}", path.display())]
    OpenFailure { path: PathBuf, reason: String },

    #[error("Could not create video {}: {reason}", path.display())]
    SinkOpen { path: PathBuf, reason: String },

    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Failed to encode frame {index}: {reason}")]
    Encode { index: usize, reason: String },

    #[error(
        "{} is {actual_width}x{actual_height}, but the sequence started at {expected_width}x{expected_height}",
        path.display()
    )]
    DimensionMismatch {
        path: PathBuf,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_message_includes_path() {
        let err = ConvertError::Decode {
            path: PathBuf::from("/tmp/frame_0002.jpg"),
            reason: "bad header".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("frame_0002.jpg"));
        assert!(msg.contains("bad header"));
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = ConvertError::DimensionMismatch {
            path: PathBuf::from("c.jpg"),
            expected_width: 100,
            expected_height: 50,
            actual_width: 200,
            actual_height: 50,
        };
        let msg = err.to_string();
        assert!(msg.contains("200x50"));
        assert!(msg.contains("100x50"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ConvertError = io.into();
        assert!(matches!(err, ConvertError::Io(_)));
    }
}
