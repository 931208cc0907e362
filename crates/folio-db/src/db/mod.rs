//! Database repositories

pub mod books;
pub mod datasets;
pub mod journals;

use folio_core::AppError;
use sqlx::PgPool;

/// Run embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))?;
    tracing::info!("Database migrations applied");
    Ok(())
}
