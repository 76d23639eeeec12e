use picform_core::OperationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Unrecognized image format")]
    UnknownFormat,

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Cannot encode a {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },

    #[error("Image is too large to encode: {width}x{height}")]
    TooLarge { width: u32, height: u32 },
}

impl From<ProcessingError> for OperationError {
    fn from(err: ProcessingError) -> Self {
        match err {
            ProcessingError::UnknownFormat | ProcessingError::Decode(_) => {
                OperationError::Decode(err.to_string())
            }
            ProcessingError::Encode(_)
            | ProcessingError::EmptyImage { .. }
            | ProcessingError::TooLarge { .. } => OperationError::Encode(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_operation_error() {
        let err: OperationError = ProcessingError::UnknownFormat.into();
        assert!(matches!(err, OperationError::Decode(_)));

        let err: OperationError = ProcessingError::EmptyImage {
            width: 0,
            height: 5,
        }
        .into();
        match err {
            OperationError::Encode(msg) => assert!(msg.contains("0x5")),
            other => panic!("Expected Encode variant, got {:?}", other),
        }

        let err: OperationError = ProcessingError::TooLarge {
            width: 70_000,
            height: 1,
        }
        .into();
        assert!(matches!(err, OperationError::Encode(_)));
    }
}
