//! HTTP handlers

pub mod book_get;
pub mod book_submit;
pub mod dashboard;
pub mod dataset_submit;
pub mod health;
pub mod journal_submit;
pub mod publisher_books;
pub mod publishers;
