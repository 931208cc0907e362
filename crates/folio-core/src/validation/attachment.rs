//! Attachment validation
//!
//! Pure size and MIME-family checks applied to a selected file before any
//! upload is attempted. A rejected attachment must never reach the uploader.

use crate::models::Attachment;

/// Validation failures for a selected attachment
#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: usize, max: usize },

    #[error("Unsupported file type: {content_type} (accepted: {accepted})")]
    WrongType {
        content_type: String,
        accepted: String,
    },
}

/// Size and MIME-family constraints for one attachment slot.
///
/// A slot with no accepted prefix (raw dataset files) only enforces the size
/// cap; the submitting form constrains the format list.
#[derive(Debug, Clone, Copy)]
pub struct AttachmentPolicy {
    max_size_bytes: usize,
    accepted_type_prefix: Option<&'static str>,
}

impl AttachmentPolicy {
    /// Policy for image slots (covers, thumbnails).
    pub const fn image(max_size_bytes: usize) -> Self {
        Self {
            max_size_bytes,
            accepted_type_prefix: Some("image/"),
        }
    }

    /// Policy that accepts any content type up to the size cap.
    pub const fn any(max_size_bytes: usize) -> Self {
        Self {
            max_size_bytes,
            accepted_type_prefix: None,
        }
    }

    /// Check an attachment against this policy.
    ///
    /// Size is checked before content type, so an oversize file of the wrong
    /// type reports `TooLarge`.
    pub fn validate(&self, attachment: &Attachment) -> Result<(), AttachmentError> {
        if attachment.size() > self.max_size_bytes {
            return Err(AttachmentError::TooLarge {
                size: attachment.size(),
                max: self.max_size_bytes,
            });
        }

        if let Some(prefix) = self.accepted_type_prefix {
            if !attachment
                .content_type
                .to_lowercase()
                .starts_with(prefix)
            {
                return Err(AttachmentError::WrongType {
                    content_type: attachment.content_type.clone(),
                    accepted: format!("{}*", prefix),
                });
            }
        }

        Ok(())
    }
}
