//! Operation and output format models

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::OperationError;

/// The four image operations exposed over HTTP.
///
/// Each operation owns an output directory, a route and the query parameter
/// used to report its failures back to the index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Upload,
    Resize,
    Convert,
    Crop,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Upload,
        Operation::Resize,
        Operation::Convert,
        Operation::Crop,
    ];

    /// Output directory name, relative to the storage root
    pub fn directory(self) -> &'static str {
        match self {
            Operation::Upload => "uploads",
            Operation::Resize => "resized_images",
            Operation::Convert => "converted_images",
            Operation::Crop => "cropped_images",
        }
    }

    /// POST route handling this operation
    pub fn route(self) -> &'static str {
        match self {
            Operation::Upload => "/upload",
            Operation::Resize => "/resize",
            Operation::Convert => "/convert",
            Operation::Crop => "/crop",
        }
    }

    /// Query parameter carrying this operation's error message
    pub fn error_param(self) -> &'static str {
        match self {
            Operation::Upload => "uploadError",
            Operation::Resize => "resizeError",
            Operation::Convert => "convertError",
            Operation::Crop => "cropError",
        }
    }

    /// URL prefix under which the output directory is served
    pub fn static_prefix(self) -> String {
        format!("/{}", self.directory())
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Operation::Upload => write!(f, "upload"),
            Operation::Resize => write!(f, "resize"),
            Operation::Convert => write!(f, "convert"),
            Operation::Crop => write!(f, "crop"),
        }
    }
}

/// Encode target for converted images.
///
/// Only the exact lowercase strings `"png"` and `"jpeg"` are accepted; `"jpg"`,
/// `"PNG"` and everything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Jpeg,
    Png,
}

impl TargetFormat {
    /// Extension appended to converted output filenames
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Jpeg => "jpeg",
            TargetFormat::Png => "png",
        }
    }
}

impl FromStr for TargetFormat {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jpeg" => Ok(TargetFormat::Jpeg),
            "png" => Ok(TargetFormat::Png),
            other => Err(OperationError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl Display for TargetFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.extension())
    }
}
