//! Database pool setup

use std::time::Duration;

use anyhow::{Context, Result};
use folio_core::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn setup_database(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections())
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds()))
        .connect(config.database_url())
        .await
        .context("Failed to connect to database")?;

    folio_db::run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    tracing::info!(
        max_connections = config.db_max_connections(),
        "Database pool ready"
    );

    Ok(pool)
}
