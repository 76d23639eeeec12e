//! Offloading CPU-bound image work from the async runtime

use picform_core::OperationError;
use picform_processing::ProcessingError;

/// Run an image processing closure on the blocking thread pool.
///
/// A panicked or cancelled task is reported as [`OperationError::Internal`].
pub async fn run_blocking<F, T>(task: F) -> Result<T, OperationError>
where
    F: FnOnce() -> Result<T, ProcessingError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to join blocking task");
            OperationError::Internal(e.to_string())
        })?
        .map_err(OperationError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_blocking_returns_value() {
        let value = run_blocking(|| Ok::<_, ProcessingError>(42)).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_run_blocking_maps_processing_error() {
        let result: Result<(), _> = run_blocking(|| Err(ProcessingError::UnknownFormat)).await;
        assert!(matches!(result, Err(OperationError::Decode(_))));
    }

    #[tokio::test]
    async fn test_run_blocking_panic_is_internal() {
        let result: Result<(), _> = run_blocking(|| panic!("decoder blew up")).await;
        assert!(matches!(result, Err(OperationError::Internal(_))));
    }
}
