//! Book submission handlers
//!
//! `POST /api/v0/books` creates a book; `PUT /api/v0/books/{id}` resubmits
//! an existing one. Both accept a multipart form with the book fields plus
//! optional `cover_image` and `thumbnail` file slots and an optional
//! `origin` publisher slug that steers the post-submission redirect.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use folio_core::models::{Book, BookForm};

use crate::auth::Owner;
use crate::error::HttpAppError;
use crate::services::submission::SubmissionMode;
use crate::state::AppState;
use crate::utils::multipart::SubmittedForm;

#[derive(Debug, Serialize)]
pub struct BookSubmissionResponse {
    pub book: Book,
    pub redirect: String,
}

fn book_form(form: &SubmittedForm) -> BookForm {
    BookForm {
        title: form.text("title"),
        author: form.text("author"),
        publisher: form.text("publisher"),
        isbn: form.text("isbn"),
        description: form.text("description"),
        publication_year: form.text("publication_year"),
        edition: form.text("edition"),
        language: form.text("language"),
        page_count: form.text("page_count"),
        category: form.text("category"),
        price: form.text("price"),
        subject_area: form.text("subject_area"),
    }
}

#[tracing::instrument(skip(state, multipart), fields(user_id = %owner.id, operation = "upload_book"))]
pub async fn upload_book(
    State(state): State<Arc<AppState>>,
    owner: Owner,
    multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let mut form = SubmittedForm::from_multipart(multipart)
        .await
        .map_err(HttpAppError)?;

    let cover = form.take_file("cover_image");
    let thumbnail = form.take_file("thumbnail");
    let origin = form.optional_text("origin");

    let outcome = state
        .submissions
        .submit_book(
            &owner,
            book_form(&form),
            cover,
            thumbnail,
            origin,
            SubmissionMode::Create,
        )
        .await
        .map_err(HttpAppError)?;

    let response = BookSubmissionResponse {
        book: outcome.record,
        redirect: outcome.redirect,
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[tracing::instrument(
    skip(state, multipart),
    fields(user_id = %owner.id, book_id = %id, operation = "update_book")
)]
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    owner: Owner,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let mut form = SubmittedForm::from_multipart(multipart)
        .await
        .map_err(HttpAppError)?;

    let cover = form.take_file("cover_image");
    let thumbnail = form.take_file("thumbnail");
    let origin = form.optional_text("origin");

    let outcome = state
        .submissions
        .submit_book(
            &owner,
            book_form(&form),
            cover,
            thumbnail,
            origin,
            SubmissionMode::Edit(id),
        )
        .await
        .map_err(HttpAppError)?;

    let response = BookSubmissionResponse {
        book: outcome.record,
        redirect: outcome.redirect,
    };
    Ok(Json(response).into_response())
}
