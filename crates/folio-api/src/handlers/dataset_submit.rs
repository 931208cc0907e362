//! Dataset submission handler

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use folio_core::models::{Dataset, DatasetForm};

use crate::auth::Owner;
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::multipart::SubmittedForm;

#[derive(Debug, Serialize)]
pub struct DatasetSubmissionResponse {
    pub dataset: Dataset,
    pub redirect: String,
}

fn dataset_form(form: &SubmittedForm) -> DatasetForm {
    DatasetForm {
        title: form.text("title"),
        description: form.text("description"),
        data_type: form.text("data_type"),
        file_format: form.text("file_format"),
        size_mb: form.text("size_mb"),
        keywords: form.text("keywords"),
        license: form.text("license"),
        version: form.text("version"),
        access_level: form.text("access_level"),
        doi: form.text("doi"),
        citation: form.text("citation"),
        contributor_name: form.text("contributor_name"),
    }
}

#[tracing::instrument(skip(state, multipart), fields(user_id = %owner.id, operation = "upload_dataset"))]
pub async fn upload_dataset(
    State(state): State<Arc<AppState>>,
    owner: Owner,
    multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let mut form = SubmittedForm::from_multipart(multipart)
        .await
        .map_err(HttpAppError)?;

    let thumbnail = form.take_file("thumbnail");
    let data_file = form.take_file("dataset_file");
    let origin = form.optional_text("origin");

    let outcome = state
        .submissions
        .submit_dataset(&owner, dataset_form(&form), thumbnail, data_file, origin)
        .await
        .map_err(HttpAppError)?;

    let response = DatasetSubmissionResponse {
        dataset: outcome.record,
        redirect: outcome.redirect,
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}
