//! Journal repository

use async_trait::async_trait;
use folio_core::models::{Journal, NewJournal};
use folio_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Record-store interface for journal articles. Journals have no edit
/// resubmission; they are written once and read back on the submitter's
/// dashboard.
#[async_trait]
pub trait JournalStore: Send + Sync {
    async fn insert(&self, journal: &NewJournal) -> Result<Journal, AppError>;
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Journal>, AppError>;
}

/// Postgres-backed journal repository
#[derive(Clone)]
pub struct JournalRepository {
    pool: PgPool,
}

impl JournalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JournalStore for JournalRepository {
    #[tracing::instrument(skip(self, journal), fields(db.table = "journals", db.operation = "insert"))]
    async fn insert(&self, journal: &NewJournal) -> Result<Journal, AppError> {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();

        let row: Journal = sqlx::query_as::<Postgres, Journal>(
            r#"
            INSERT INTO journals (
                id, user_id, title, authors, journal_name,
                volume, issue, pages, doi, abstract_text,
                publication_date, keywords_list, citations_count, impact_factor,
                category, thumbnail_url, open_access, peer_reviewed, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(journal.user_id)
        .bind(&journal.title)
        .bind(&journal.authors)
        .bind(&journal.journal_name)
        .bind(&journal.volume)
        .bind(&journal.issue)
        .bind(&journal.pages)
        .bind(&journal.doi)
        .bind(&journal.abstract_text)
        .bind(journal.publication_date)
        .bind(&journal.keywords_list)
        .bind(journal.citations_count)
        .bind(journal.impact_factor)
        .bind(&journal.category)
        .bind(&journal.thumbnail_url)
        .bind(journal.open_access)
        .bind(journal.peer_reviewed)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "journals", db.operation = "select"))]
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Journal>, AppError> {
        let rows: Vec<Journal> = sqlx::query_as::<Postgres, Journal>(
            "SELECT * FROM journals WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
