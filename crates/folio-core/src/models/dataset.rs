use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

use crate::compose::{comma_list, optional_text, parse_f64, text_or};
use crate::constants::{ACCESS_LEVELS, DEFAULT_ACCESS_LEVEL};
use crate::error::AppError;

/// Persisted dataset record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct Dataset {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub data_type: Option<String>,
    pub file_format: Option<String>,
    pub size_mb: Option<f64>,
    pub keywords: Option<Vec<String>>,
    pub license: Option<String>,
    pub version: Option<String>,
    pub access_level: String,
    pub doi: Option<String>,
    pub citation: Option<String>,
    pub thumbnail_url: Option<String>,
    pub dataset_url: Option<String>,
    pub contributor_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Raw dataset submission form.
#[derive(Debug, Clone, Default)]
pub struct DatasetForm {
    pub title: String,
    pub description: String,
    pub data_type: String,
    pub file_format: String,
    pub size_mb: String,
    pub keywords: String,
    pub license: String,
    pub version: String,
    pub access_level: String,
    pub doi: String,
    pub citation: String,
    pub contributor_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetAssets {
    pub thumbnail_url: Option<String>,
    pub dataset_url: Option<String>,
}

/// Composed dataset payload for insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDataset {
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub data_type: Option<String>,
    pub file_format: Option<String>,
    pub size_mb: Option<f64>,
    pub keywords: Option<Vec<String>>,
    pub license: Option<String>,
    pub version: Option<String>,
    pub access_level: String,
    pub doi: Option<String>,
    pub citation: Option<String>,
    pub thumbnail_url: Option<String>,
    pub dataset_url: Option<String>,
    pub contributor_name: Option<String>,
}

impl DatasetForm {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidInput("Title is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Description is required".to_string(),
            ));
        }
        let access_level = self.access_level.trim();
        if !access_level.is_empty() && !ACCESS_LEVELS.contains(&access_level) {
            return Err(AppError::InvalidInput(format!(
                "Unknown access level: {}",
                access_level
            )));
        }
        Ok(())
    }

    pub fn compose(&self, user_id: Uuid, assets: DatasetAssets) -> NewDataset {
        NewDataset {
            user_id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            data_type: optional_text(&self.data_type),
            file_format: optional_text(&self.file_format),
            size_mb: parse_f64(&self.size_mb),
            keywords: comma_list(&self.keywords),
            license: optional_text(&self.license),
            version: optional_text(&self.version),
            access_level: text_or(&self.access_level, DEFAULT_ACCESS_LEVEL),
            doi: optional_text(&self.doi),
            citation: optional_text(&self.citation),
            thumbnail_url: assets.thumbnail_url,
            dataset_url: assets.dataset_url,
            contributor_name: optional_text(&self.contributor_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_form() -> DatasetForm {
        DatasetForm {
            title: "Climate Readings".to_string(),
            description: "Hourly sensor data".to_string(),
            ..DatasetForm::default()
        }
    }

    #[test]
    fn test_compose_defaults_access_level() {
        let dataset = minimal_form().compose(Uuid::new_v4(), DatasetAssets::default());
        assert_eq!(dataset.access_level, "Public");
        assert_eq!(dataset.keywords, None);
        assert_eq!(dataset.dataset_url, None);
    }

    #[test]
    fn test_compose_keeps_asset_urls() {
        let assets = DatasetAssets {
            thumbnail_url: Some("https://cdn.example.com/thumb.png".to_string()),
            dataset_url: Some("https://cdn.example.com/data.csv".to_string()),
        };
        let dataset = minimal_form().compose(Uuid::new_v4(), assets.clone());
        assert_eq!(dataset.thumbnail_url, assets.thumbnail_url);
        assert_eq!(dataset.dataset_url, assets.dataset_url);
    }

    #[test]
    fn test_compose_size_mb() {
        let form = DatasetForm {
            size_mb: "100.5".to_string(),
            ..minimal_form()
        };
        let dataset = form.compose(Uuid::new_v4(), DatasetAssets::default());
        assert_eq!(dataset.size_mb, Some(100.5));
    }

    #[test]
    fn test_validate_requires_description() {
        let form = DatasetForm {
            description: "".to_string(),
            ..minimal_form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_access_level() {
        let form = DatasetForm {
            access_level: "Secret".to_string(),
            ..minimal_form()
        };
        assert!(form.validate().is_err());

        let form = DatasetForm {
            access_level: "Restricted".to_string(),
            ..minimal_form()
        };
        assert!(form.validate().is_ok());
    }
}
