use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

use crate::compose::{optional_text, parse_f64, parse_i32, text_or};
use crate::constants::{CATEGORIES, DEFAULT_AVAILABILITY_STATUS, DEFAULT_LANGUAGE};
use crate::error::AppError;
use crate::models::publisher;

/// Persisted book record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct Book {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub publication_year: Option<i32>,
    pub edition: Option<String>,
    pub language: String,
    pub page_count: Option<i32>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub subject_area: Option<String>,
    pub availability_status: String,
    pub cover_image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw book submission form. All values arrive as text; absent fields
/// default to the empty string.
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub description: String,
    pub publication_year: String,
    pub edition: String,
    pub language: String,
    pub page_count: String,
    pub category: String,
    pub price: String,
    pub subject_area: String,
}

/// Resolved asset URLs merged into the composed payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookAssets {
    pub cover_image_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// Composed book payload for insert or update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub user_id: Uuid,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub publication_year: Option<i32>,
    pub edition: Option<String>,
    pub language: String,
    pub page_count: Option<i32>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub subject_area: Option<String>,
    pub availability_status: String,
    pub cover_image_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl BookForm {
    /// Required-field check. Composition itself cannot fail; this runs first.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidInput("Title is required".to_string()));
        }
        if self.author.trim().is_empty() {
            return Err(AppError::InvalidInput("Author is required".to_string()));
        }
        if !publisher::is_known_name(self.publisher.trim()) {
            return Err(AppError::InvalidInput(format!(
                "Unknown publisher: {}",
                self.publisher
            )));
        }
        let category = self.category.trim();
        if !category.is_empty() && !CATEGORIES.contains(&category) {
            return Err(AppError::InvalidInput(format!(
                "Unknown category: {}",
                category
            )));
        }
        Ok(())
    }

    /// Compose the typed payload from the raw fields and resolved asset URLs.
    pub fn compose(&self, user_id: Uuid, assets: BookAssets) -> NewBook {
        NewBook {
            user_id,
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            publisher: self.publisher.trim().to_string(),
            isbn: optional_text(&self.isbn),
            description: optional_text(&self.description),
            publication_year: parse_i32(&self.publication_year),
            edition: optional_text(&self.edition),
            language: text_or(&self.language, DEFAULT_LANGUAGE),
            page_count: parse_i32(&self.page_count),
            category: optional_text(&self.category),
            price: parse_f64(&self.price),
            subject_area: optional_text(&self.subject_area),
            availability_status: DEFAULT_AVAILABILITY_STATUS.to_string(),
            cover_image_url: assets.cover_image_url,
            thumbnail_url: assets.thumbnail_url,
        }
    }
}
