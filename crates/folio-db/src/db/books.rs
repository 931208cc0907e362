//! Book repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::models::{Book, NewBook};
use folio_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Record-store interface for books.
///
/// `update` resolves to `None` when the write touched no rows (missing id or
/// foreign owner); the caller decides how loud that failure is.
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn insert(&self, book: &NewBook) -> Result<Book, AppError>;
    async fn update(&self, id: Uuid, user_id: Uuid, book: &NewBook)
        -> Result<Option<Book>, AppError>;
    async fn get(&self, id: Uuid) -> Result<Option<Book>, AppError>;
    /// All books for a publisher display name, newest first.
    async fn list_by_publisher(&self, publisher: &str) -> Result<Vec<Book>, AppError>;
    /// All books submitted by a user, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Book>, AppError>;
    async fn count_by_publisher(&self, publisher: &str) -> Result<i64, AppError>;
    async fn count_by_publisher_since(
        &self,
        publisher: &str,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError>;
}

/// Postgres-backed book repository
#[derive(Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BookRepository {
    #[tracing::instrument(skip(self, book), fields(db.table = "books", db.operation = "insert"))]
    async fn insert(&self, book: &NewBook) -> Result<Book, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row: Book = sqlx::query_as::<Postgres, Book>(
            r#"
            INSERT INTO books (
                id, user_id, title, author, publisher,
                isbn, description, publication_year, edition, language,
                page_count, category, price, subject_area, availability_status,
                cover_image_url, thumbnail_url, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(book.user_id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(&book.isbn)
        .bind(&book.description)
        .bind(book.publication_year)
        .bind(&book.edition)
        .bind(&book.language)
        .bind(book.page_count)
        .bind(&book.category)
        .bind(book.price)
        .bind(&book.subject_area)
        .bind(&book.availability_status)
        .bind(&book.cover_image_url)
        .bind(&book.thumbnail_url)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(
        skip(self, book),
        fields(db.table = "books", db.operation = "update", book_id = %id)
    )]
    async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        book: &NewBook,
    ) -> Result<Option<Book>, AppError> {
        let row: Option<Book> = sqlx::query_as::<Postgres, Book>(
            r#"
            UPDATE books SET
                title = $3, author = $4, publisher = $5,
                isbn = $6, description = $7, publication_year = $8, edition = $9,
                language = $10, page_count = $11, category = $12, price = $13,
                subject_area = $14, availability_status = $15,
                cover_image_url = $16, thumbnail_url = $17, updated_at = $18
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(&book.isbn)
        .bind(&book.description)
        .bind(book.publication_year)
        .bind(&book.edition)
        .bind(&book.language)
        .bind(book.page_count)
        .bind(&book.category)
        .bind(book.price)
        .bind(&book.subject_area)
        .bind(&book.availability_status)
        .bind(&book.cover_image_url)
        .bind(&book.thumbnail_url)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "books", db.operation = "select", book_id = %id))]
    async fn get(&self, id: Uuid) -> Result<Option<Book>, AppError> {
        let row: Option<Book> =
            sqlx::query_as::<Postgres, Book>("SELECT * FROM books WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "books", db.operation = "select", publisher = %publisher))]
    async fn list_by_publisher(&self, publisher: &str) -> Result<Vec<Book>, AppError> {
        let rows: Vec<Book> = sqlx::query_as::<Postgres, Book>(
            "SELECT * FROM books WHERE publisher = $1 ORDER BY created_at DESC",
        )
        .bind(publisher)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    #[tracing::instrument(skip(self), fields(db.table = "books", db.operation = "select"))]
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Book>, AppError> {
        let rows: Vec<Book> = sqlx::query_as::<Postgres, Book>(
            "SELECT * FROM books WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn count_by_publisher(&self, publisher: &str) -> Result<i64, AppError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM books WHERE publisher = $1")
                .bind(publisher)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }

    async fn count_by_publisher_since(
        &self,
        publisher: &str,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM books WHERE publisher = $1 AND created_at > $2",
        )
        .bind(publisher)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
