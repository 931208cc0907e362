//! Journal submission handler

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use folio_core::models::{Journal, JournalForm};

use crate::auth::Owner;
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::multipart::SubmittedForm;

#[derive(Debug, Serialize)]
pub struct JournalSubmissionResponse {
    pub journal: Journal,
    pub redirect: String,
}

fn journal_form(form: &SubmittedForm) -> JournalForm {
    JournalForm {
        title: form.text("title"),
        authors: form.text("authors"),
        journal_name: form.text("journal_name"),
        volume: form.text("volume"),
        issue: form.text("issue"),
        pages: form.text("pages"),
        doi: form.text("doi"),
        abstract_text: form.text("abstract"),
        publication_date: form.text("publication_date"),
        keywords_list: form.text("keywords_list"),
        citations_count: form.text("citations_count"),
        impact_factor: form.text("impact_factor"),
        category: form.text("category"),
        open_access: form.text("open_access"),
        peer_reviewed: form.text("peer_reviewed"),
    }
}

#[tracing::instrument(skip(state, multipart), fields(user_id = %owner.id, operation = "upload_journal"))]
pub async fn upload_journal(
    State(state): State<Arc<AppState>>,
    owner: Owner,
    multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let mut form = SubmittedForm::from_multipart(multipart)
        .await
        .map_err(HttpAppError)?;

    let thumbnail = form.take_file("thumbnail");
    let origin = form.optional_text("origin");

    let outcome = state
        .submissions
        .submit_journal(&owner, journal_form(&form), thumbnail, origin)
        .await
        .map_err(HttpAppError)?;

    let response = JournalSubmissionResponse {
        journal: outcome.record,
        redirect: outcome.redirect,
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}
