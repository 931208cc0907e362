//! Application setup and initialization
//!
//! All application initialization logic lives here instead of main.rs:
//! configuration validation, telemetry, database, storage, state, routes.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use folio_core::Config;
use folio_db::{BookRepository, DatasetRepository, JournalRepository};

use crate::notify::LogNotifier;
use crate::services::submission::{AttachmentLimits, SubmissionService};
use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    let pool = database::setup_database(&config).await?;
    let storage = storage::setup_storage(&config).await?;

    let books = Arc::new(BookRepository::new(pool.clone()));
    let journals = Arc::new(JournalRepository::new(pool.clone()));
    let datasets = Arc::new(DatasetRepository::new(pool.clone()));
    let notifier = Arc::new(LogNotifier);

    let submissions = SubmissionService::new(
        books.clone(),
        journals.clone(),
        datasets.clone(),
        storage.clone(),
        notifier.clone(),
        AttachmentLimits::from_config(&config),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        pool,
        books,
        journals,
        datasets,
        storage,
        notifier,
        submissions,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
