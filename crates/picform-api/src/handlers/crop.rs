use std::sync::Arc;

use axum::extract::{multipart::MultipartRejection, Multipart, State};
use picform_core::{IntegerField, Operation, OperationError};
use picform_storage::{client_filename, output_filename};

use crate::error::OperationOutcome;
use crate::state::AppState;
use crate::utils::{run_blocking, FormData};

/// Crop image handler
///
/// Validates `file`, `x`, `y`, `width` and `height` in that order. The window
/// may hang off the image (or miss it entirely); uncovered pixels are black.
/// Stored as JPEG in `cropped_images/cropped_<filename>`.
#[tracing::instrument(skip(state, multipart), fields(operation = "crop"))]
pub async fn crop(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> OperationOutcome {
    OperationOutcome::new(Operation::Crop, crop_image(&state, multipart).await)
}

async fn crop_image(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(), OperationError> {
    let mut form = FormData::from_multipart(multipart).await?;
    let file = form.take_file()?;
    let filename = client_filename(&file.filename)?;
    let x: i64 = form.parse_integer(IntegerField::X)?;
    let y: i64 = form.parse_integer(IntegerField::Y)?;
    let width: u32 = form.parse_integer(IntegerField::Width)?;
    let height: u32 = form.parse_integer(IntegerField::Height)?;

    let pipeline = state.pipeline;
    let data = file.data;
    let encoded = run_blocking(move || pipeline.crop(&data, x, y, width, height)).await?;

    let output = output_filename(Operation::Crop, &filename, None);
    state
        .storage
        .write(Operation::Crop, &output, &encoded)
        .await?;

    Ok(())
}
