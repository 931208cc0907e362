//! Shared test fixtures: in-memory stores, recording notifier, and a
//! pre-wired submission service.

#![allow(dead_code)]

pub mod notify;
pub mod stores;

use std::sync::Arc;

use uuid::Uuid;

use folio_api::auth::Owner;
use folio_api::services::submission::{AttachmentLimits, SubmissionService};
use folio_core::models::{Attachment, BookForm};
use folio_storage::MemoryStorage;

use notify::RecordingNotifier;
use stores::{InMemoryBookStore, InMemoryDatasetStore, InMemoryJournalStore};

pub const MAX_COVER: usize = 5 * 1024 * 1024;
pub const MAX_THUMBNAIL: usize = 2 * 1024 * 1024;
pub const MAX_DATASET_FILE: usize = 100 * 1024 * 1024;

pub struct TestHarness {
    pub service: SubmissionService,
    pub storage: MemoryStorage,
    pub books: InMemoryBookStore,
    pub journals: InMemoryJournalStore,
    pub datasets: InMemoryDatasetStore,
    pub notifier: RecordingNotifier,
}

pub fn harness() -> TestHarness {
    let storage = MemoryStorage::new();
    let books = InMemoryBookStore::new();
    let journals = InMemoryJournalStore::new();
    let datasets = InMemoryDatasetStore::new();
    let notifier = RecordingNotifier::new();

    let service = SubmissionService::new(
        Arc::new(books.clone()),
        Arc::new(journals.clone()),
        Arc::new(datasets.clone()),
        Arc::new(storage.clone()),
        Arc::new(notifier.clone()),
        AttachmentLimits::new(MAX_COVER, MAX_THUMBNAIL, MAX_DATASET_FILE),
    );

    TestHarness {
        service,
        storage,
        books,
        journals,
        datasets,
        notifier,
    }
}

pub fn owner() -> Owner {
    Owner {
        id: Uuid::new_v4(),
        email: Some("author@example.com".to_string()),
    }
}

pub fn image_attachment(file_name: &str, size: usize) -> Attachment {
    Attachment {
        file_name: file_name.to_string(),
        content_type: "image/png".to_string(),
        data: vec![0u8; size],
    }
}

pub fn attachment(file_name: &str, content_type: &str, size: usize) -> Attachment {
    Attachment {
        file_name: file_name.to_string(),
        content_type: content_type.to_string(),
        data: vec![0u8; size],
    }
}

pub fn book_form() -> BookForm {
    BookForm {
        title: "Intro to Systems".to_string(),
        author: "A. Engineer".to_string(),
        publisher: "Dhara Publications".to_string(),
        ..BookForm::default()
    }
}
