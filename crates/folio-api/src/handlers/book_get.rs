//! Book detail lookup

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use folio_core::AppError;

use crate::error::HttpAppError;
use crate::state::AppState;

#[tracing::instrument(skip(state), fields(book_id = %id, operation = "get_book"))]
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let book = state
        .books
        .get(id)
        .await
        .map_err(HttpAppError)?
        .ok_or_else(|| HttpAppError(AppError::NotFound("Book not found".to_string())))?;

    Ok(Json(book))
}
