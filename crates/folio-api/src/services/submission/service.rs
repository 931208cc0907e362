//! Submission service
//!
//! One pipeline for all three record types: validate the form and any
//! attachments, upload attachments one at a time to their buckets, compose
//! the typed payload with the resolved URLs, persist, and notify. The first
//! failing step aborts the submission; attachments uploaded before the
//! failure stay behind as orphans and no record is written for them.

use std::sync::Arc;

use chrono::Utc;

use folio_core::models::{
    Attachment, Book, BookAssets, BookForm, Dataset, DatasetAssets, DatasetForm, Journal,
    JournalAssets, JournalForm,
};
use folio_core::AppError;
use folio_db::{BookStore, DatasetStore, JournalStore};
use folio_storage::{object_key, Storage};

use crate::auth::Owner;
use crate::notify::Notifier;

use super::types::{redirect_target, AssetSlot, AttachmentLimits, SubmissionMode, SubmissionOutcome};

/// Orchestrates record submissions against the record stores, the blob
/// store, and the notification sink. Identity arrives as an explicit
/// [Owner] per call; the service holds no session state.
#[derive(Clone)]
pub struct SubmissionService {
    books: Arc<dyn BookStore>,
    journals: Arc<dyn JournalStore>,
    datasets: Arc<dyn DatasetStore>,
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    limits: AttachmentLimits,
}

impl SubmissionService {
    pub fn new(
        books: Arc<dyn BookStore>,
        journals: Arc<dyn JournalStore>,
        datasets: Arc<dyn DatasetStore>,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
        limits: AttachmentLimits,
    ) -> Self {
        Self {
            books,
            journals,
            datasets,
            storage,
            notifier,
            limits,
        }
    }

    /// Submit a book, either as a new record or as an edit of an existing
    /// one. In edit mode, slots with no new attachment keep the previously
    /// stored URLs.
    #[tracing::instrument(
        skip(self, form, cover, thumbnail),
        fields(user_id = %owner.id, operation = "submit_book")
    )]
    pub async fn submit_book(
        &self,
        owner: &Owner,
        form: BookForm,
        cover: Option<Attachment>,
        thumbnail: Option<Attachment>,
        origin: Option<String>,
        mode: SubmissionMode,
    ) -> Result<SubmissionOutcome<Book>, AppError> {
        let result = self
            .submit_book_inner(owner, form, cover, thumbnail, origin.as_deref(), mode)
            .await;

        let success_message = match mode {
            SubmissionMode::Create => "Book uploaded successfully!",
            SubmissionMode::Edit(_) => "Book updated successfully!",
        };
        self.report(&result, success_message);
        result
    }

    async fn submit_book_inner(
        &self,
        owner: &Owner,
        form: BookForm,
        cover: Option<Attachment>,
        thumbnail: Option<Attachment>,
        origin: Option<&str>,
        mode: SubmissionMode,
    ) -> Result<SubmissionOutcome<Book>, AppError> {
        // 1. Validate fields and attachments before any remote call
        form.validate()?;
        let cover_slot = self.limits.cover_slot();
        let thumbnail_slot = self.limits.book_thumbnail_slot();
        if let Some(attachment) = &cover {
            cover_slot.policy.validate(attachment)?;
        }
        if let Some(attachment) = &thumbnail {
            thumbnail_slot.policy.validate(attachment)?;
        }

        // 2. Edit mode starts from the stored record's asset URLs
        let existing = match mode {
            SubmissionMode::Edit(id) => Some(
                self.books
                    .get(id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?,
            ),
            SubmissionMode::Create => None,
        };

        // 3. Upload attachments one at a time; the first failure aborts
        let cover_image_url = match cover {
            Some(attachment) => Some(self.upload_asset(owner, &cover_slot, attachment).await?),
            None => existing.as_ref().and_then(|b| b.cover_image_url.clone()),
        };
        let thumbnail_url = match thumbnail {
            Some(attachment) => Some(self.upload_asset(owner, &thumbnail_slot, attachment).await?),
            None => existing.as_ref().and_then(|b| b.thumbnail_url.clone()),
        };

        // 4. Compose the typed payload
        let payload = form.compose(
            owner.id,
            BookAssets {
                cover_image_url,
                thumbnail_url,
            },
        );

        // 5. Persist. An update that touches no rows is a loud failure, not
        //    a silent no-op.
        let book = match mode {
            SubmissionMode::Create => self.books.insert(&payload).await?,
            SubmissionMode::Edit(id) => self
                .books
                .update(id, owner.id, &payload)
                .await?
                .ok_or_else(|| {
                    AppError::WriteDenied(format!("Update of book {} affected no rows", id))
                })?,
        };

        Ok(SubmissionOutcome {
            record: book,
            redirect: redirect_target(origin),
        })
    }

    /// Submit a journal article.
    #[tracing::instrument(
        skip(self, form, thumbnail),
        fields(user_id = %owner.id, operation = "submit_journal")
    )]
    pub async fn submit_journal(
        &self,
        owner: &Owner,
        form: JournalForm,
        thumbnail: Option<Attachment>,
        origin: Option<String>,
    ) -> Result<SubmissionOutcome<Journal>, AppError> {
        let result = self
            .submit_journal_inner(owner, form, thumbnail, origin.as_deref())
            .await;
        self.report(&result, "Journal uploaded successfully!");
        result
    }

    async fn submit_journal_inner(
        &self,
        owner: &Owner,
        form: JournalForm,
        thumbnail: Option<Attachment>,
        origin: Option<&str>,
    ) -> Result<SubmissionOutcome<Journal>, AppError> {
        form.validate()?;
        let thumbnail_slot = self.limits.journal_thumbnail_slot();
        if let Some(attachment) = &thumbnail {
            thumbnail_slot.policy.validate(attachment)?;
        }

        let thumbnail_url = match thumbnail {
            Some(attachment) => Some(self.upload_asset(owner, &thumbnail_slot, attachment).await?),
            None => None,
        };

        let payload = form.compose(owner.id, JournalAssets { thumbnail_url });
        let journal = self.journals.insert(&payload).await?;

        Ok(SubmissionOutcome {
            record: journal,
            redirect: redirect_target(origin),
        })
    }

    /// Submit a dataset with an optional thumbnail and raw data file.
    #[tracing::instrument(
        skip(self, form, thumbnail, data_file),
        fields(user_id = %owner.id, operation = "submit_dataset")
    )]
    pub async fn submit_dataset(
        &self,
        owner: &Owner,
        form: DatasetForm,
        thumbnail: Option<Attachment>,
        data_file: Option<Attachment>,
        origin: Option<String>,
    ) -> Result<SubmissionOutcome<Dataset>, AppError> {
        let result = self
            .submit_dataset_inner(owner, form, thumbnail, data_file, origin.as_deref())
            .await;
        self.report(&result, "Dataset uploaded successfully!");
        result
    }

    async fn submit_dataset_inner(
        &self,
        owner: &Owner,
        form: DatasetForm,
        thumbnail: Option<Attachment>,
        data_file: Option<Attachment>,
        origin: Option<&str>,
    ) -> Result<SubmissionOutcome<Dataset>, AppError> {
        form.validate()?;
        let thumbnail_slot = self.limits.dataset_thumbnail_slot();
        let file_slot = self.limits.dataset_file_slot();
        if let Some(attachment) = &thumbnail {
            thumbnail_slot.policy.validate(attachment)?;
        }
        if let Some(attachment) = &data_file {
            file_slot.policy.validate(attachment)?;
        }

        let thumbnail_url = match thumbnail {
            Some(attachment) => Some(self.upload_asset(owner, &thumbnail_slot, attachment).await?),
            None => None,
        };
        let dataset_url = match data_file {
            Some(attachment) => Some(self.upload_asset(owner, &file_slot, attachment).await?),
            None => None,
        };

        let payload = form.compose(
            owner.id,
            DatasetAssets {
                thumbnail_url,
                dataset_url,
            },
        );
        let dataset = self.datasets.insert(&payload).await?;

        Ok(SubmissionOutcome {
            record: dataset,
            redirect: redirect_target(origin),
        })
    }

    /// Upload one validated attachment and resolve its public URL. The URL
    /// is only handed back once the write has completed, so a composed
    /// record never references an unfinished upload.
    async fn upload_asset(
        &self,
        owner: &Owner,
        slot: &AssetSlot,
        attachment: Attachment,
    ) -> Result<String, AppError> {
        let key = object_key(owner.id, slot.key_slot, &attachment.file_name, Utc::now());
        let size = attachment.size();

        tracing::info!(
            bucket = %slot.bucket,
            key = %key,
            size_bytes = size,
            "Uploading attachment"
        );

        self.storage
            .put(slot.bucket, &key, &attachment.content_type, attachment.data)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %slot.bucket,
                    key = %key,
                    "Attachment upload failed"
                );
                AppError::Storage(e.to_string())
            })?;

        Ok(self.storage.public_url(slot.bucket, &key))
    }

    /// Report the terminal outcome to the notification sink.
    fn report<T>(&self, result: &Result<SubmissionOutcome<T>, AppError>, success_message: &str) {
        use folio_core::ErrorMetadata;

        match result {
            Ok(_) => self.notifier.success(success_message),
            Err(e) => self.notifier.error(&e.client_message()),
        }
    }
}
