//! Application state
//!
//! Shared state handed to handlers: configuration, the database pool, the
//! record stores, the storage backend, and the submission service built on
//! top of them.

use std::sync::Arc;

use folio_core::Config;
use folio_db::{BookStore, DatasetStore, JournalStore};
use folio_storage::Storage;
use sqlx::PgPool;

use crate::notify::Notifier;
use crate::services::submission::SubmissionService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub books: Arc<dyn BookStore>,
    pub journals: Arc<dyn JournalStore>,
    pub datasets: Arc<dyn DatasetStore>,
    pub storage: Arc<dyn Storage>,
    pub notifier: Arc<dyn Notifier>,
    pub submissions: SubmissionService,
}
