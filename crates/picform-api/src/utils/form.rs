//! Multipart form extraction for the operation handlers

use axum::extract::{multipart::MultipartRejection, Multipart};
use bytes::Bytes;
use picform_core::{IntegerField, OperationError};
use std::collections::HashMap;
use std::str::FromStr;

use crate::constants::FILE_FIELD;

/// The image part of an operation form
#[derive(Debug)]
pub struct UploadedFile {
    /// Filename exactly as sent by the client; not yet sanitized
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// A fully read multipart form.
///
/// The body is drained once up front so validation can run in a fixed order no
/// matter how the client ordered its fields. Only the first `file` part with a
/// non-empty filename counts; for text fields the first value wins.
#[derive(Debug, Default)]
pub struct FormData {
    file: Option<UploadedFile>,
    fields: HashMap<String, String>,
}

impl FormData {
    /// Read the whole form.
    ///
    /// Anything that stops us from reading the body (wrong content type,
    /// malformed boundary, body over the size limit) is reported as a missing
    /// file, since that is what the caller observes first.
    pub async fn from_multipart(
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Self, OperationError> {
        let mut multipart =
            multipart.map_err(|rejection| OperationError::MissingFile(rejection.body_text()))?;
        let mut form = FormData::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            OperationError::MissingFile(format!("Failed to read multipart: {}", e))
        })? {
            let name = field.name().unwrap_or_default().to_string();

            if name == FILE_FIELD {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(|s: &str| s.to_string());
                let data = field.bytes().await.map_err(|e| {
                    OperationError::MissingFile(format!("Failed to read file data: {}", e))
                })?;

                if form.file.is_none() && !filename.is_empty() {
                    form.file = Some(UploadedFile {
                        filename,
                        content_type,
                        data,
                    });
                }
            } else {
                let value = field.text().await.map_err(|e| {
                    OperationError::MissingFile(format!("Failed to read field {}: {}", name, e))
                })?;
                form.fields.entry(name).or_insert(value);
            }
        }

        Ok(form)
    }

    /// Take the uploaded image, failing if the form had none
    pub fn take_file(&mut self) -> Result<UploadedFile, OperationError> {
        self.file
            .take()
            .ok_or_else(|| OperationError::MissingFile("No file provided".to_string()))
    }

    /// Raw text value of a field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Parse a numeric field as decimal. The raw value is used as-is: no
    /// trimming, so `" 10"` is invalid. A missing field is invalid too.
    pub fn parse_integer<T: FromStr>(&self, field: IntegerField) -> Result<T, OperationError> {
        let raw = self.field(field.name()).unwrap_or_default();
        raw.parse::<T>().map_err(|_| OperationError::InvalidInteger {
            field,
            value: raw.to_string(),
        })
    }
}
