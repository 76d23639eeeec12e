use std::sync::Arc;

use axum::extract::{multipart::MultipartRejection, Multipart, State};
use picform_core::{Operation, OperationError};
use picform_storage::{client_filename, output_filename};

use crate::error::OperationOutcome;
use crate::state::AppState;
use crate::utils::FormData;

/// Upload image handler
///
/// Stores the `file` part byte-for-byte in `uploads/<filename>`. The content
/// is not inspected, so any file type is accepted.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload"))]
pub async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> OperationOutcome {
    OperationOutcome::new(Operation::Upload, store_upload(&state, multipart).await)
}

async fn store_upload(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(), OperationError> {
    let mut form = FormData::from_multipart(multipart).await?;
    let file = form.take_file()?;
    let filename = client_filename(&file.filename)?;

    let output = output_filename(Operation::Upload, &filename, None);
    state
        .storage
        .write(Operation::Upload, &output, &file.data)
        .await?;

    tracing::debug!(
        filename = %output,
        content_type = ?file.content_type,
        size_bytes = file.data.len(),
        "Image uploaded"
    );

    Ok(())
}
