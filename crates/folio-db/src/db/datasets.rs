//! Dataset repository

use async_trait::async_trait;
use folio_core::models::{Dataset, NewDataset};
use folio_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Record-store interface for datasets. Written once and read back on the
/// submitter's dashboard, like journals.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    async fn insert(&self, dataset: &NewDataset) -> Result<Dataset, AppError>;
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Dataset>, AppError>;
}

/// Postgres-backed dataset repository
#[derive(Clone)]
pub struct DatasetRepository {
    pool: PgPool,
}

impl DatasetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatasetStore for DatasetRepository {
    #[tracing::instrument(skip(self, dataset), fields(db.table = "datasets", db.operation = "insert"))]
    async fn insert(&self, dataset: &NewDataset) -> Result<Dataset, AppError> {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();

        let row: Dataset = sqlx::query_as::<Postgres, Dataset>(
            r#"
            INSERT INTO datasets (
                id, user_id, title, description, data_type,
                file_format, size_mb, keywords, license, version,
                access_level, doi, citation, thumbnail_url, dataset_url,
                contributor_name, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dataset.user_id)
        .bind(&dataset.title)
        .bind(&dataset.description)
        .bind(&dataset.data_type)
        .bind(&dataset.file_format)
        .bind(dataset.size_mb)
        .bind(&dataset.keywords)
        .bind(&dataset.license)
        .bind(&dataset.version)
        .bind(&dataset.access_level)
        .bind(&dataset.doi)
        .bind(&dataset.citation)
        .bind(&dataset.thumbnail_url)
        .bind(&dataset.dataset_url)
        .bind(&dataset.contributor_name)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "datasets", db.operation = "select"))]
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Dataset>, AppError> {
        let rows: Vec<Dataset> = sqlx::query_as::<Postgres, Dataset>(
            "SELECT * FROM datasets WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
