//! Multipart form extraction
//!
//! Collects a submission's text fields and named file attachments from a
//! multipart request body. File parts are recognized by the presence of a
//! filename; an empty file part means the slot was left unselected and is
//! dropped.

use std::collections::HashMap;

use axum::extract::Multipart;
use folio_core::models::Attachment;
use folio_core::AppError;

/// A collected multipart submission: text fields plus file attachments,
/// both addressed by field name.
#[derive(Debug, Default)]
pub struct SubmittedForm {
    fields: HashMap<String, String>,
    files: HashMap<String, Attachment>,
}

impl SubmittedForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = SubmittedForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
        {
            let name = field.name().map(|s| s.to_string()).unwrap_or_default();
            if name.is_empty() {
                continue;
            }

            if let Some(file_name) = field.file_name().map(|s| s.to_string()) {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;

                if data.is_empty() {
                    continue;
                }

                form.files.insert(
                    name,
                    Attachment {
                        file_name,
                        content_type,
                        data: data.to_vec(),
                    },
                );
            } else {
                let text = field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read field: {}", e))
                })?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    /// Text value of a field; missing fields read as the empty string, which
    /// the composer treats as "not provided".
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Non-empty text value, or `None`.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Take the attachment submitted under a field name, if any.
    pub fn take_file(&mut self, name: &str) -> Option<Attachment> {
        self.files.remove(name)
    }
}
