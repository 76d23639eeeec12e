use std::sync::Arc;

use axum::extract::{multipart::MultipartRejection, Multipart, State};
use picform_core::{Operation, OperationError, TargetFormat};
use picform_storage::{client_filename, output_filename};

use crate::constants::FORMAT_FIELD;
use crate::error::OperationOutcome;
use crate::state::AppState;
use crate::utils::{run_blocking, FormData};

/// Convert image handler
///
/// Re-encodes `file` as `format` (exactly `png` or `jpeg`) and stores it in
/// `converted_images/<filename>.<format>`. An unsupported format is rejected
/// before the image is decoded.
#[tracing::instrument(skip(state, multipart), fields(operation = "convert"))]
pub async fn convert(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> OperationOutcome {
    OperationOutcome::new(Operation::Convert, convert_image(&state, multipart).await)
}

async fn convert_image(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(), OperationError> {
    let mut form = FormData::from_multipart(multipart).await?;
    let file = form.take_file()?;
    let filename = client_filename(&file.filename)?;
    let format: TargetFormat = form.field(FORMAT_FIELD).unwrap_or_default().parse()?;

    let pipeline = state.pipeline;
    let data = file.data;
    let encoded = run_blocking(move || pipeline.convert(&data, format)).await?;

    let output = output_filename(Operation::Convert, &filename, Some(format));
    state
        .storage
        .write(Operation::Convert, &output, &encoded)
        .await?;

    Ok(())
}
