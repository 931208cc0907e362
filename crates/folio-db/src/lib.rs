//! Folio DB Library
//!
//! Record-store traits and their Postgres repositories. The traits are the
//! seam between the submission pipeline and the database so the pipeline can
//! be exercised against in-memory fakes.

pub mod db;

pub use db::books::{BookRepository, BookStore};
pub use db::datasets::{DatasetRepository, DatasetStore};
pub use db::journals::{JournalRepository, JournalStore};
pub use db::run_migrations;
