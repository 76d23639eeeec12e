//! Redirect rendering for operation results
//!
//! Handlers never answer with an HTTP error status. Every outcome is a
//! `302 Found` back to the index page; a failure adds the operation's error
//! query parameter carrying the URL-encoded client message, e.g.
//! `/?resizeError=Invalid%20width`.
//!
//! **Handler pattern:** do the work in a helper returning
//! `Result<(), OperationError>` and wrap it with [`OperationOutcome::new`].

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use picform_core::{LogLevel, Operation, OperationError};

use crate::constants::INDEX_PATH;

#[derive(Debug)]
pub struct OperationOutcome {
    operation: Operation,
    result: Result<(), OperationError>,
}

impl OperationOutcome {
    pub fn new(operation: Operation, result: Result<(), OperationError>) -> Self {
        Self { operation, result }
    }

    /// Redirect target for this outcome
    pub fn location(&self) -> String {
        match &self.result {
            Ok(()) => INDEX_PATH.to_string(),
            Err(err) => format!(
                "{}?{}={}",
                INDEX_PATH,
                self.operation.error_param(),
                urlencoding::encode(&err.client_message(self.operation))
            ),
        }
    }
}

impl IntoResponse for OperationOutcome {
    fn into_response(self) -> Response {
        if let Err(err) = &self.result {
            log_error(self.operation, err);
        }

        (StatusCode::FOUND, [(header::LOCATION, self.location())]).into_response()
    }
}

fn log_error(operation: Operation, error: &OperationError) {
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(operation = %operation, error = %error, code, "Operation rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(operation = %operation, error = %error, code, "Operation failed");
        }
        LogLevel::Error => {
            tracing::error!(operation = %operation, error = %error, code, "Operation failed");
        }
    }
}
