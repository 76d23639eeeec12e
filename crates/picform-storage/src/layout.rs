//! Output filename derivation

use picform_core::{Operation, OperationError, TargetFormat};

/// Reduce a client-supplied filename to its final path component.
///
/// Both `/` and `\` count as separators regardless of platform, so
/// `../../etc/passwd` becomes `passwd` and `C:\photos\cat.jpg` becomes `cat.jpg`.
/// Names that are empty or a bare `.`/`..` after reduction are rejected.
pub fn client_filename(raw: &str) -> Result<String, OperationError> {
    let name = raw.rsplit(&['/', '\\'][..]).next().unwrap_or(raw);

    if name.is_empty() || name == "." || name == ".." || name.contains('\0') {
        return Err(OperationError::InvalidFilename(raw.to_string()));
    }

    Ok(name.to_string())
}

/// Output filename for an operation.
///
/// `format` is only consulted for [`Operation::Convert`]; the original extension
/// is kept, so `photo.jpg` converted to png is stored as `photo.jpg.png`.
pub fn output_filename(operation: Operation, filename: &str, format: Option<TargetFormat>) -> String {
    match (operation, format) {
        (Operation::Upload, _) => filename.to_string(),
        (Operation::Resize, _) => format!("resized_{}", filename),
        (Operation::Crop, _) => format!("cropped_{}", filename),
        (Operation::Convert, Some(format)) => format!("{}.{}", filename, format.extension()),
        (Operation::Convert, None) => filename.to_string(),
    }
}
