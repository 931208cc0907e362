//! Publisher book listing
//!
//! `GET /api/v0/publishers/{slug}/books?search=&category=` fetches every
//! book for the publisher, newest first, then applies the text/category
//! filter in memory. The response distinguishes a publisher with no books
//! from a filter that matched nothing.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use folio_core::models::{publisher, Book};
use folio_core::{AppError, BookFilter};

use crate::error::HttpAppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BookListQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "all".to_string()
}

#[derive(Debug, Serialize)]
pub struct PublisherBooksResponse {
    pub publisher: String,
    pub books: Vec<Book>,
    pub total_books: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Message shown when the list renders empty: an unfiltered empty base set
/// means the publisher has no books yet; an empty filtered set over a
/// non-empty base means nothing matched.
fn list_notice(total: usize, filtered: usize) -> Option<String> {
    if total == 0 {
        Some("No books available for this publisher yet.".to_string())
    } else if filtered == 0 {
        Some("No books match your search.".to_string())
    } else {
        None
    }
}

#[tracing::instrument(
    skip(state, query),
    fields(publisher = %slug, operation = "list_publisher_books")
)]
pub async fn list_publisher_books(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<BookListQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let publisher = publisher::by_slug(&slug)
        .ok_or_else(|| HttpAppError(AppError::NotFound(format!("Unknown publisher: {}", slug))))?;

    let base = state
        .books
        .list_by_publisher(publisher.name)
        .await
        .map_err(HttpAppError)?;
    let total_books = base.len();

    let filter = BookFilter::new(query.search, query.category);
    let books = if filter.is_empty() {
        base
    } else {
        filter.apply(&base)
    };
    let notice = list_notice(total_books, books.len());

    Ok(Json(PublisherBooksResponse {
        publisher: publisher.name.to_string(),
        total_books,
        books,
        notice,
    }))
}
