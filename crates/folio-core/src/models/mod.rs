//! Domain models
//!
//! Each record type has three shapes: the persisted row (`Book`, `Journal`,
//! `Dataset`), the raw submission form of text fields (`*Form`), and the
//! composed insert/update payload with resolved asset URLs (`New*`).

pub mod attachment;
pub mod book;
pub mod dataset;
pub mod journal;
pub mod publisher;

pub use attachment::Attachment;
pub use book::{Book, BookAssets, BookForm, NewBook};
pub use dataset::{Dataset, DatasetAssets, DatasetForm, NewDataset};
pub use journal::{Journal, JournalAssets, JournalForm, NewJournal};
pub use publisher::Publisher;
