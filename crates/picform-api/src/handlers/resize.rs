use std::sync::Arc;

use axum::extract::{multipart::MultipartRejection, Multipart, State};
use picform_core::{IntegerField, Operation, OperationError};
use picform_storage::{client_filename, output_filename};

use crate::error::OperationOutcome;
use crate::state::AppState;
use crate::utils::{run_blocking, FormData};

/// Resize image handler
///
/// Validates `file`, `width` and `height` in that order, scales the image to
/// exactly `width`x`height` and stores it as JPEG in
/// `resized_images/resized_<filename>`.
#[tracing::instrument(skip(state, multipart), fields(operation = "resize"))]
pub async fn resize(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> OperationOutcome {
    OperationOutcome::new(Operation::Resize, resize_image(&state, multipart).await)
}

async fn resize_image(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(), OperationError> {
    let mut form = FormData::from_multipart(multipart).await?;
    let file = form.take_file()?;
    let filename = client_filename(&file.filename)?;
    let width: u32 = form.parse_integer(IntegerField::Width)?;
    let height: u32 = form.parse_integer(IntegerField::Height)?;

    let pipeline = state.pipeline;
    let data = file.data;
    let encoded = run_blocking(move || pipeline.resize(&data, width, height)).await?;

    let output = output_filename(Operation::Resize, &filename, None);
    state
        .storage
        .write(Operation::Resize, &output, &encoded)
        .await?;

    Ok(())
}
