//! Publisher catalog with per-publisher statistics

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{Duration, Utc};
use serde::Serialize;

use folio_core::models::publisher;

use crate::error::HttpAppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PublisherStats {
    pub slug: &'static str,
    pub name: &'static str,
    pub total_books: i64,
    pub recent_books: i64,
}

#[derive(Debug, Serialize)]
pub struct PublishersResponse {
    pub publishers: Vec<PublisherStats>,
}

#[tracing::instrument(skip(state), fields(operation = "list_publishers"))]
pub async fn list_publishers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let month_ago = Utc::now() - Duration::days(30);

    let mut publishers = Vec::with_capacity(publisher::CATALOG.len());
    for entry in publisher::CATALOG {
        let total_books = state
            .books
            .count_by_publisher(entry.name)
            .await
            .map_err(HttpAppError)?;
        let recent_books = state
            .books
            .count_by_publisher_since(entry.name, month_ago)
            .await
            .map_err(HttpAppError)?;

        publishers.push(PublisherStats {
            slug: entry.slug,
            name: entry.name,
            total_books,
            recent_books,
        });
    }

    Ok(Json(PublishersResponse { publishers }))
}
