//! Submitter dashboard
//!
//! `GET /api/v0/me/publications` returns everything the authenticated user
//! has submitted, newest first per record type.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use folio_core::models::{Book, Dataset, Journal};

use crate::auth::Owner;
use crate::error::HttpAppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MyPublicationsResponse {
    pub books: Vec<Book>,
    pub journals: Vec<Journal>,
    pub datasets: Vec<Dataset>,
}

#[tracing::instrument(skip(state), fields(user_id = %owner.id, operation = "my_publications"))]
pub async fn my_publications(
    State(state): State<Arc<AppState>>,
    owner: Owner,
) -> Result<impl IntoResponse, HttpAppError> {
    let books = state
        .books
        .list_for_user(owner.id)
        .await
        .map_err(HttpAppError)?;
    let journals = state
        .journals
        .list_for_user(owner.id)
        .await
        .map_err(HttpAppError)?;
    let datasets = state
        .datasets
        .list_for_user(owner.id)
        .await
        .map_err(HttpAppError)?;

    Ok(Json(MyPublicationsResponse {
        books,
        journals,
        datasets,
    }))
}
