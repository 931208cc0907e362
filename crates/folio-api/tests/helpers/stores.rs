//! In-memory record stores implementing the folio-db store traits.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use folio_core::models::{Book, Dataset, Journal, NewBook, NewDataset, NewJournal};
use folio_core::AppError;
use folio_db::{BookStore, DatasetStore, JournalStore};

fn write_denied() -> AppError {
    AppError::WriteDenied("new row violates row-level security policy".to_string())
}

#[derive(Clone, Default)]
pub struct InMemoryBookStore {
    books: Arc<Mutex<Vec<Book>>>,
    insert_count: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make inserts fail, mimicking a permission-denied write.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn insert_count(&self) -> usize {
        self.insert_count.load(Ordering::SeqCst)
    }

    pub fn all(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }

    pub fn seed(&self, book: Book) {
        self.books.lock().unwrap().push(book);
    }

    fn materialize(payload: &NewBook, id: Uuid, created_at: DateTime<Utc>) -> Book {
        Book {
            id,
            user_id: payload.user_id,
            title: payload.title.clone(),
            author: payload.author.clone(),
            publisher: payload.publisher.clone(),
            isbn: payload.isbn.clone(),
            description: payload.description.clone(),
            publication_year: payload.publication_year,
            edition: payload.edition.clone(),
            language: payload.language.clone(),
            page_count: payload.page_count,
            category: payload.category.clone(),
            price: payload.price,
            subject_area: payload.subject_area.clone(),
            availability_status: payload.availability_status.clone(),
            cover_image_url: payload.cover_image_url.clone(),
            thumbnail_url: payload.thumbnail_url.clone(),
            created_at,
            updated_at: Utc::now(),
        }
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn insert(&self, payload: &NewBook) -> Result<Book, AppError> {
        self.insert_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(write_denied());
        }

        let book = Self::materialize(payload, Uuid::new_v4(), Utc::now());
        self.books.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        payload: &NewBook,
    ) -> Result<Option<Book>, AppError> {
        let mut books = self.books.lock().unwrap();
        match books
            .iter_mut()
            .find(|b| b.id == id && b.user_id == user_id)
        {
            Some(slot) => {
                let updated = Self::materialize(payload, slot.id, slot.created_at);
                *slot = updated.clone();
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    async fn get(&self, id: Uuid) -> Result<Option<Book>, AppError> {
        Ok(self.books.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn list_by_publisher(&self, publisher: &str) -> Result<Vec<Book>, AppError> {
        let mut books: Vec<Book> = self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.publisher == publisher)
            .cloned()
            .collect();
        books.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(books)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Book>, AppError> {
        let mut books: Vec<Book> = self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        books.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(books)
    }

    async fn count_by_publisher(&self, publisher: &str) -> Result<i64, AppError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.publisher == publisher)
            .count() as i64)
    }

    async fn count_by_publisher_since(
        &self,
        publisher: &str,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.publisher == publisher && b.created_at > since)
            .count() as i64)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryJournalStore {
    journals: Arc<Mutex<Vec<Journal>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryJournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn all(&self) -> Vec<Journal> {
        self.journals.lock().unwrap().clone()
    }
}

#[async_trait]
impl JournalStore for InMemoryJournalStore {
    async fn insert(&self, payload: &NewJournal) -> Result<Journal, AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(write_denied());
        }

        let journal = Journal {
            id: Uuid::new_v4(),
            user_id: payload.user_id,
            title: payload.title.clone(),
            authors: payload.authors.clone(),
            journal_name: payload.journal_name.clone(),
            volume: payload.volume.clone(),
            issue: payload.issue.clone(),
            pages: payload.pages.clone(),
            doi: payload.doi.clone(),
            abstract_text: payload.abstract_text.clone(),
            publication_date: payload.publication_date,
            keywords_list: payload.keywords_list.clone(),
            citations_count: payload.citations_count,
            impact_factor: payload.impact_factor,
            category: payload.category.clone(),
            thumbnail_url: payload.thumbnail_url.clone(),
            open_access: payload.open_access,
            peer_reviewed: payload.peer_reviewed,
            created_at: Utc::now(),
        };
        self.journals.lock().unwrap().push(journal.clone());
        Ok(journal)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Journal>, AppError> {
        Ok(self
            .journals
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryDatasetStore {
    datasets: Arc<Mutex<Vec<Dataset>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryDatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn all(&self) -> Vec<Dataset> {
        self.datasets.lock().unwrap().clone()
    }
}

#[async_trait]
impl DatasetStore for InMemoryDatasetStore {
    async fn insert(&self, payload: &NewDataset) -> Result<Dataset, AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(write_denied());
        }

        let dataset = Dataset {
            id: Uuid::new_v4(),
            user_id: payload.user_id,
            title: payload.title.clone(),
            description: payload.description.clone(),
            data_type: payload.data_type.clone(),
            file_format: payload.file_format.clone(),
            size_mb: payload.size_mb,
            keywords: payload.keywords.clone(),
            license: payload.license.clone(),
            version: payload.version.clone(),
            access_level: payload.access_level.clone(),
            doi: payload.doi.clone(),
            citation: payload.citation.clone(),
            thumbnail_url: payload.thumbnail_url.clone(),
            dataset_url: payload.dataset_url.clone(),
            contributor_name: payload.contributor_name.clone(),
            created_at: Utc::now(),
        };
        self.datasets.lock().unwrap().push(dataset.clone());
        Ok(dataset)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Dataset>, AppError> {
        Ok(self
            .datasets
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect())
    }
}
