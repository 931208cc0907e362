use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

use crate::compose::{comma_list, optional_text, parse_bool_or, parse_date, parse_f64, parse_i32_or};
use crate::constants::CATEGORIES;
use crate::error::AppError;

/// Persisted journal article record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct Journal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub authors: Vec<String>,
    pub journal_name: String,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pages: Option<String>,
    pub doi: Option<String>,
    pub abstract_text: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub keywords_list: Option<Vec<String>>,
    pub citations_count: i32,
    pub impact_factor: Option<f64>,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
    pub open_access: bool,
    pub peer_reviewed: bool,
    pub created_at: DateTime<Utc>,
}

/// Raw journal submission form.
#[derive(Debug, Clone, Default)]
pub struct JournalForm {
    pub title: String,
    pub authors: String,
    pub journal_name: String,
    pub volume: String,
    pub issue: String,
    pub pages: String,
    pub doi: String,
    pub abstract_text: String,
    pub publication_date: String,
    pub keywords_list: String,
    pub citations_count: String,
    pub impact_factor: String,
    pub category: String,
    pub open_access: String,
    pub peer_reviewed: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalAssets {
    pub thumbnail_url: Option<String>,
}

/// Composed journal payload for insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJournal {
    pub user_id: Uuid,
    pub title: String,
    pub authors: Vec<String>,
    pub journal_name: String,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pages: Option<String>,
    pub doi: Option<String>,
    pub abstract_text: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub keywords_list: Option<Vec<String>>,
    pub citations_count: i32,
    pub impact_factor: Option<f64>,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
    pub open_access: bool,
    pub peer_reviewed: bool,
}

impl JournalForm {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidInput("Title is required".to_string()));
        }
        if comma_list(&self.authors).is_none() {
            return Err(AppError::InvalidInput(
                "At least one author is required".to_string(),
            ));
        }
        if self.journal_name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Journal name is required".to_string(),
            ));
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

    /// Compose the typed payload. `peer_reviewed` defaults on, `open_access`
    /// off, `citations_count` to zero, matching the submission form defaults.
    pub fn compose(&self, user_id: Uuid, assets: JournalAssets) -> NewJournal {
        NewJournal {
            user_id,
            title: self.title.trim().to_string(),
            authors: comma_list(&self.authors).unwrap_or_default(),
            journal_name: self.journal_name.trim().to_string(),
            volume: optional_text(&self.volume),
            issue: optional_text(&self.issue),
            pages: optional_text(&self.pages),
            doi: optional_text(&self.doi),
            abstract_text: optional_text(&self.abstract_text),
            publication_date: parse_date(&self.publication_date),
            keywords_list: comma_list(&self.keywords_list),
            citations_count: parse_i32_or(&self.citations_count, 0),
            impact_factor: parse_f64(&self.impact_factor),
            category: optional_text(&self.category),
            thumbnail_url: assets.thumbnail_url,
            open_access: parse_bool_or(&self.open_access, false),
            peer_reviewed: parse_bool_or(&self.peer_reviewed, true),
        }
    }
}
