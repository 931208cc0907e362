//! Shared constants: bucket names, defaults, and catalog values.

/// Bucket holding book cover images.
pub const BOOK_COVERS_BUCKET: &str = "book-covers";

/// Bucket holding thumbnails for books, journals, and datasets.
pub const THUMBNAILS_BUCKET: &str = "thumbnails";

/// Bucket holding raw dataset files.
pub const DATASET_FILES_BUCKET: &str = "dataset-files";

/// Default size cap for cover images (5 MB).
pub const MAX_COVER_SIZE_BYTES: usize = 5 * 1024 * 1024;

/// Default size cap for thumbnails (2 MB).
pub const MAX_THUMBNAIL_SIZE_BYTES: usize = 2 * 1024 * 1024;

/// Default size cap for raw dataset files (100 MB).
pub const MAX_DATASET_FILE_SIZE_BYTES: usize = 100 * 1024 * 1024;

pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_ACCESS_LEVEL: &str = "Public";
pub const DEFAULT_AVAILABILITY_STATUS: &str = "Available";

/// Subject categories offered by the submission forms.
pub const CATEGORIES: &[&str] = &[
    "Science & Technology",
    "Medicine & Healthcare",
    "Engineering",
    "Social Sciences",
    "Humanities",
    "Business & Economics",
    "Law",
    "Education",
];

/// Dataset access levels.
pub const ACCESS_LEVELS: &[&str] = &["Public", "Restricted", "Private"];
