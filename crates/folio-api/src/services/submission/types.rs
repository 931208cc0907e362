//! Submission pipeline types

use folio_core::constants::{BOOK_COVERS_BUCKET, DATASET_FILES_BUCKET, THUMBNAILS_BUCKET};
use folio_core::models::publisher;
use folio_core::{AttachmentPolicy, Config};
use serde::Serialize;
use uuid::Uuid;

/// One attachment slot of a submission: the destination bucket, the key
/// suffix that distinguishes the slot, and the validation policy.
#[derive(Debug, Clone, Copy)]
pub struct AssetSlot {
    pub bucket: &'static str,
    pub key_slot: Option<&'static str>,
    pub policy: AttachmentPolicy,
}

/// Per-slot attachment policies derived from configuration.
#[derive(Debug, Clone, Copy)]
pub struct AttachmentLimits {
    max_cover_size_bytes: usize,
    max_thumbnail_size_bytes: usize,
    max_dataset_file_size_bytes: usize,
}

impl AttachmentLimits {
    pub fn new(
        max_cover_size_bytes: usize,
        max_thumbnail_size_bytes: usize,
        max_dataset_file_size_bytes: usize,
    ) -> Self {
        Self {
            max_cover_size_bytes,
            max_thumbnail_size_bytes,
            max_dataset_file_size_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.max_cover_size_bytes(),
            config.max_thumbnail_size_bytes(),
            config.max_dataset_file_size_bytes(),
        )
    }

    pub fn cover_slot(&self) -> AssetSlot {
        AssetSlot {
            bucket: BOOK_COVERS_BUCKET,
            key_slot: Some("cover"),
            policy: AttachmentPolicy::image(self.max_cover_size_bytes),
        }
    }

    pub fn book_thumbnail_slot(&self) -> AssetSlot {
        AssetSlot {
            bucket: THUMBNAILS_BUCKET,
            key_slot: Some("thumb"),
            policy: AttachmentPolicy::image(self.max_thumbnail_size_bytes),
        }
    }

    pub fn journal_thumbnail_slot(&self) -> AssetSlot {
        AssetSlot {
            bucket: THUMBNAILS_BUCKET,
            key_slot: Some("journal"),
            policy: AttachmentPolicy::image(self.max_thumbnail_size_bytes),
        }
    }

    pub fn dataset_thumbnail_slot(&self) -> AssetSlot {
        AssetSlot {
            bucket: THUMBNAILS_BUCKET,
            key_slot: Some("dataset"),
            policy: AttachmentPolicy::image(self.max_thumbnail_size_bytes),
        }
    }

    pub fn dataset_file_slot(&self) -> AssetSlot {
        AssetSlot {
            bucket: DATASET_FILES_BUCKET,
            key_slot: None,
            policy: AttachmentPolicy::any(self.max_dataset_file_size_bytes),
        }
    }
}

/// Create a new record, or update an existing one by id (books only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMode {
    Create,
    Edit(Uuid),
}

/// Terminal result of a successful submission: the persisted record and the
/// path the client should navigate to.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome<T> {
    pub record: T,
    pub redirect: String,
}

/// Post-submission navigation: the publisher's book list when the submission
/// carried a recognized origin slug, otherwise the dashboard.
pub fn redirect_target(origin: Option<&str>) -> String {
    match origin.and_then(publisher::by_slug) {
        Some(publisher) => format!("/publishers/{}/books", publisher.slug),
        None => "/dashboard".to_string(),
    }
}
