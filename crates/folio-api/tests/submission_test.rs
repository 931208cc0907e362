//! Submission pipeline scenarios: validation gating, sequential uploads,
//! asset URL composition, persistence failures, and edit resubmission.

mod helpers;

use folio_api::services::submission::SubmissionMode;
use folio_core::models::{BookForm, DatasetForm, JournalForm};
use folio_core::AppError;

use helpers::{attachment, book_form, harness, image_attachment, owner, MAX_COVER};

#[tokio::test]
async fn submit_book_without_attachments_inserts_once_and_redirects_to_dashboard() {
    let h = harness();
    let owner = owner();

    let outcome = h
        .service
        .submit_book(
            &owner,
            book_form(),
            None,
            None,
            None,
            SubmissionMode::Create,
        )
        .await
        .expect("submission succeeds");

    let book = &outcome.record;
    assert_eq!(book.title, "Intro to Systems");
    assert_eq!(book.author, "A. Engineer");
    assert_eq!(book.publisher, "Dhara Publications");
    assert_eq!(book.cover_image_url, None);
    assert_eq!(book.thumbnail_url, None);
    assert_eq!(book.publication_year, None);
    assert_eq!(book.user_id, owner.id);

    assert_eq!(outcome.redirect, "/dashboard");
    assert_eq!(h.books.insert_count(), 1);
    assert_eq!(h.storage.put_count(), 0);
    assert_eq!(
        h.notifier.successes(),
        vec!["Book uploaded successfully!".to_string()]
    );
}

#[tokio::test]
async fn oversize_cover_is_rejected_before_any_remote_call() {
    let h = harness();

    let result = h
        .service
        .submit_book(
            &owner(),
            book_form(),
            Some(image_attachment("cover.png", MAX_COVER + 1024)),
            None,
            None,
            SubmissionMode::Create,
        )
        .await;

    assert!(matches!(result, Err(AppError::PayloadTooLarge(_))));
    assert_eq!(h.storage.put_count(), 0);
    assert_eq!(h.books.insert_count(), 0);
    assert_eq!(h.notifier.errors().len(), 1);
}

#[tokio::test]
async fn wrong_attachment_type_is_rejected_before_any_remote_call() {
    let h = harness();

    let result = h
        .service
        .submit_book(
            &owner(),
            book_form(),
            Some(attachment("cover.pdf", "application/pdf", 1024)),
            None,
            None,
            SubmissionMode::Create,
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert_eq!(h.storage.put_count(), 0);
    assert_eq!(h.books.insert_count(), 0);
}

#[tokio::test]
async fn attachments_upload_sequentially_into_their_buckets() {
    let h = harness();
    let owner = owner();

    let outcome = h
        .service
        .submit_book(
            &owner,
            book_form(),
            Some(image_attachment("cover.png", 1024)),
            Some(image_attachment("thumb.png", 512)),
            None,
            SubmissionMode::Create,
        )
        .await
        .expect("submission succeeds");

    let log = h.storage.put_log();
    assert_eq!(log.len(), 2);
    assert!(log[0].starts_with("book-covers/"));
    assert!(log[1].starts_with("thumbnails/"));

    let book = &outcome.record;
    let cover_url = book.cover_image_url.as_deref().expect("cover url");
    let thumbnail_url = book.thumbnail_url.as_deref().expect("thumbnail url");
    assert!(cover_url.contains("/book-covers/"));
    assert!(thumbnail_url.contains("/thumbnails/"));
    assert!(cover_url.contains("-cover.png"));
    assert!(thumbnail_url.contains("-thumb.png"));
}

#[tokio::test]
async fn upload_failure_aborts_submission_before_persistence() {
    let h = harness();
    h.storage.set_fail_puts(true);

    let result = h
        .service
        .submit_book(
            &owner(),
            book_form(),
            Some(image_attachment("cover.png", 1024)),
            None,
            None,
            SubmissionMode::Create,
        )
        .await;

    assert!(matches!(result, Err(AppError::Storage(_))));
    assert_eq!(h.books.insert_count(), 0);
    assert!(h.books.all().is_empty());
    assert_eq!(h.notifier.errors().len(), 1);
}

#[tokio::test]
async fn failed_insert_leaves_uploaded_asset_orphaned() {
    let h = harness();
    h.books.set_fail_writes(true);

    let result = h
        .service
        .submit_book(
            &owner(),
            book_form(),
            Some(image_attachment("cover.png", 2048)),
            None,
            None,
            SubmissionMode::Create,
        )
        .await;

    assert!(matches!(result, Err(AppError::WriteDenied(_))));
    // The upload completed before the insert failed; the object stays behind
    // and no record references it.
    assert_eq!(h.storage.object_count(), 1);
    assert!(h.books.all().is_empty());
    assert_eq!(h.notifier.errors().len(), 1);
}

#[tokio::test]
async fn unknown_publisher_is_rejected_without_remote_calls() {
    let h = harness();
    let form = BookForm {
        publisher: "Oxford University Press".to_string(),
        ..book_form()
    };

    let result = h
        .service
        .submit_book(&owner(), form, None, None, None, SubmissionMode::Create)
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert_eq!(h.storage.put_count(), 0);
    assert_eq!(h.books.insert_count(), 0);
}

#[tokio::test]
async fn edit_without_new_files_keeps_stored_asset_urls() {
    let h = harness();
    let owner = owner();

    let created = h
        .service
        .submit_book(
            &owner,
            book_form(),
            Some(image_attachment("cover.png", 1024)),
            Some(image_attachment("thumb.png", 512)),
            None,
            SubmissionMode::Create,
        )
        .await
        .expect("create succeeds")
        .record;

    let cover_url = created.cover_image_url.clone();
    let thumbnail_url = created.thumbnail_url.clone();
    assert!(cover_url.is_some());

    let updated = h
        .service
        .submit_book(
            &owner,
            book_form(),
            None,
            None,
            None,
            SubmissionMode::Edit(created.id),
        )
        .await
        .expect("edit succeeds")
        .record;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.cover_image_url, cover_url);
    assert_eq!(updated.thumbnail_url, thumbnail_url);
    // No new uploads happened during the edit.
    assert_eq!(h.storage.put_count(), 2);
    assert_eq!(h.books.insert_count(), 1);
}

#[tokio::test]
async fn edit_replaces_only_the_resubmitted_slot() {
    let h = harness();
    let owner = owner();

    let created = h
        .service
        .submit_book(
            &owner,
            book_form(),
            Some(image_attachment("cover.png", 1024)),
            Some(image_attachment("thumb.png", 512)),
            None,
            SubmissionMode::Create,
        )
        .await
        .expect("create succeeds")
        .record;

    // Object keys are timestamped to the millisecond; make sure the second
    // cover upload cannot collide with the first.
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;

    let updated = h
        .service
        .submit_book(
            &owner,
            book_form(),
            Some(image_attachment("new-cover.png", 2048)),
            None,
            None,
            SubmissionMode::Edit(created.id),
        )
        .await
        .expect("edit succeeds")
        .record;

    assert_ne!(updated.cover_image_url, created.cover_image_url);
    assert_eq!(updated.thumbnail_url, created.thumbnail_url);
}

#[tokio::test]
async fn edit_by_another_user_affects_no_rows_and_fails_loudly() {
    let h = harness();
    let author = owner();

    let created = h
        .service
        .submit_book(
            &author,
            book_form(),
            None,
            None,
            None,
            SubmissionMode::Create,
        )
        .await
        .expect("create succeeds")
        .record;

    let intruder = owner();
    let result = h
        .service
        .submit_book(
            &intruder,
            book_form(),
            None,
            None,
            None,
            SubmissionMode::Edit(created.id),
        )
        .await;

    assert!(matches!(result, Err(AppError::WriteDenied(_))));
    // The stored record is untouched.
    let stored = h.books.all();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_id, author.id);
}

#[tokio::test]
async fn edit_of_missing_book_is_not_found() {
    let h = harness();

    let result = h
        .service
        .submit_book(
            &owner(),
            book_form(),
            None,
            None,
            None,
            SubmissionMode::Edit(uuid::Uuid::new_v4()),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn submission_with_origin_redirects_to_publisher_books() {
    let h = harness();

    let outcome = h
        .service
        .submit_book(
            &owner(),
            book_form(),
            None,
            None,
            Some("dhara-publications".to_string()),
            SubmissionMode::Create,
        )
        .await
        .expect("submission succeeds");

    assert_eq!(outcome.redirect, "/publishers/dhara-publications/books");
}

#[tokio::test]
async fn journal_submission_uploads_thumbnail_and_splits_authors() {
    let h = harness();
    let owner = owner();

    let form = JournalForm {
        title: "On Caching".to_string(),
        authors: "John Doe, Jane Smith".to_string(),
        journal_name: "Systems Letters".to_string(),
        keywords_list: " , ".to_string(),
        ..JournalForm::default()
    };

    let outcome = h
        .service
        .submit_journal(
            &owner,
            form,
            Some(image_attachment("figure.png", 1024)),
            None,
        )
        .await
        .expect("submission succeeds");

    let journal = &outcome.record;
    assert_eq!(journal.authors, vec!["John Doe", "Jane Smith"]);
    assert_eq!(journal.keywords_list, None);
    assert!(journal
        .thumbnail_url
        .as_deref()
        .expect("thumbnail url")
        .contains("/thumbnails/"));
    assert!(journal.peer_reviewed);
    assert_eq!(journal.citations_count, 0);
    assert_eq!(
        h.notifier.successes(),
        vec!["Journal uploaded successfully!".to_string()]
    );
}

#[tokio::test]
async fn dataset_submission_uploads_thumbnail_then_data_file() {
    let h = harness();

    let form = DatasetForm {
        title: "Climate Readings".to_string(),
        description: "Hourly sensor data".to_string(),
        ..DatasetForm::default()
    };

    let outcome = h
        .service
        .submit_dataset(
            &owner(),
            form,
            Some(image_attachment("thumb.png", 1024)),
            Some(attachment("readings.csv", "text/csv", 4096)),
            None,
        )
        .await
        .expect("submission succeeds");

    let dataset = &outcome.record;
    assert!(dataset
        .thumbnail_url
        .as_deref()
        .expect("thumbnail url")
        .contains("/thumbnails/"));
    assert!(dataset
        .dataset_url
        .as_deref()
        .expect("dataset url")
        .contains("/dataset-files/"));
    assert_eq!(dataset.access_level, "Public");

    let log = h.storage.put_log();
    assert_eq!(log.len(), 2);
    assert!(log[0].starts_with("thumbnails/"));
    assert!(log[1].starts_with("dataset-files/"));
}

#[tokio::test]
async fn failed_dataset_insert_orphans_both_uploaded_assets() {
    let h = harness();

    let form = DatasetForm {
        title: "Climate Readings".to_string(),
        description: "Hourly sensor data".to_string(),
        ..DatasetForm::default()
    };

    h.datasets.set_fail_writes(true);

    let result = h
        .service
        .submit_dataset(
            &owner(),
            form,
            Some(image_attachment("thumb.png", 1024)),
            Some(attachment("readings.csv", "text/csv", 4096)),
            None,
        )
        .await;

    assert!(matches!(result, Err(AppError::WriteDenied(_))));
    assert_eq!(h.storage.object_count(), 2);
    assert!(h.datasets.all().is_empty());
}
