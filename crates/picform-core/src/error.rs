//! Error types module
//!
//! Every failure a request handler can hit is an `OperationError`. Handlers never
//! surface these as HTTP errors: the API layer turns each one into a redirect to
//! the index page carrying `client_message` in the operation's query parameter.
//!
//! Storage and processing crates keep their own error enums and convert into
//! `OperationError` at the crate boundary.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::models::Operation;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for bad client data that got past validation
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Numeric form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerField {
    X,
    Y,
    Width,
    Height,
}

impl IntegerField {
    /// Multipart field name
    pub fn name(self) -> &'static str {
        match self {
            IntegerField::X => "x",
            IntegerField::Y => "y",
            IntegerField::Width => "width",
            IntegerField::Height => "height",
        }
    }
}

impl Display for IntegerField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error("Missing file: {0}")]
    MissingFile(String),

    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),

    #[error("Invalid integer for field '{field}': {value:?}")]
    InvalidInteger { field: IntegerField, value: String },

    #[error("Unsupported target format: {0:?}")]
    UnsupportedFormat(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl OperationError {
    /// Message shown on the index page under the operation's form
    pub fn client_message(&self, operation: Operation) -> String {
        match self {
            OperationError::MissingFile(_) => "Failed to get file".to_string(),
            OperationError::InvalidFilename(_) => "Invalid file name".to_string(),
            OperationError::InvalidInteger { field, .. } => match field {
                IntegerField::X => "Invalid X value".to_string(),
                IntegerField::Y => "Invalid Y value".to_string(),
                IntegerField::Width => "Invalid width".to_string(),
                IntegerField::Height => "Invalid height".to_string(),
            },
            OperationError::UnsupportedFormat(_) => {
                "Only png and jpeg formats are supported".to_string()
            }
            OperationError::Decode(_) => "Failed to decode image".to_string(),
            OperationError::Encode(_) => "Failed to encode image".to_string(),
            OperationError::Io(_) if operation == Operation::Upload => {
                "Failed to save file".to_string()
            }
            OperationError::Io(_) => "Failed to save image".to_string(),
            OperationError::Internal(_) => "Failed to process image".to_string(),
        }
    }

    /// Machine-readable error code, used in logs
    pub fn error_code(&self) -> &'static str {
        self.static_metadata().0
    }

    pub fn log_level(&self) -> LogLevel {
        self.static_metadata().1
    }

    fn static_metadata(&self) -> (&'static str, LogLevel) {
        match self {
            OperationError::MissingFile(_) => ("MISSING_FILE", LogLevel::Debug),
            OperationError::InvalidFilename(_) => ("INVALID_FILENAME", LogLevel::Warn),
            OperationError::InvalidInteger { .. } => ("INVALID_INTEGER", LogLevel::Debug),
            OperationError::UnsupportedFormat(_) => ("UNSUPPORTED_FORMAT", LogLevel::Debug),
            OperationError::Decode(_) => ("DECODE_ERROR", LogLevel::Warn),
            OperationError::Encode(_) => ("ENCODE_ERROR", LogLevel::Error),
            OperationError::Io(_) => ("IO_ERROR", LogLevel::Error),
            OperationError::Internal(_) => ("INTERNAL_ERROR", LogLevel::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_field_messages() {
        let cases = [
            (IntegerField::X, "Invalid X value"),
            (IntegerField::Y, "Invalid Y value"),
            (IntegerField::Width, "Invalid width"),
            (IntegerField::Height, "Invalid height"),
        ];
        for (field, expected) in cases {
            let err = OperationError::InvalidInteger {
                field,
                value: "abc".to_string(),
            };
            assert_eq!(err.client_message(Operation::Crop), expected);
        }
    }

    #[test]
    fn test_io_message_depends_on_operation() {
        let err = OperationError::Io("disk full".to_string());
        assert_eq!(err.client_message(Operation::Upload), "Failed to save file");
        assert_eq!(err.client_message(Operation::Resize), "Failed to save image");
    }

    #[test]
    fn test_client_message_hides_details() {
        let err = OperationError::Decode("unexpected EOF in /tmp/secret".to_string());
        let message = err.client_message(Operation::Resize);
        assert_eq!(message, "Failed to decode image");
        assert!(err.to_string().contains("unexpected EOF"));
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(
            OperationError::MissingFile("no part".to_string()).log_level(),
            LogLevel::Debug
        );
        assert_eq!(
            OperationError::Decode("bad".to_string()).log_level(),
            LogLevel::Warn
        );
        assert_eq!(
            OperationError::Io("denied".to_string()).log_level(),
            LogLevel::Error
        );
        assert_eq!(
            OperationError::UnsupportedFormat("bmp".to_string()).error_code(),
            "UNSUPPORTED_FORMAT"
        );
    }
}
