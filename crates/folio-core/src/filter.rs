//! Listing filter
//!
//! Text and category filtering over a fetched book list. The filter is a
//! pure predicate recomputed against the base set; it never mutates it.

use crate::models::Book;

/// Active filter state for a publisher book list.
///
/// An empty search term matches everything; category `"all"` (or empty)
/// matches every category.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub search: String,
    pub category: String,
}

impl BookFilter {
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        let category = self.category.trim();
        self.search.trim().is_empty() && (category.is_empty() || category == "all")
    }

    /// A book matches iff the search term is empty or a case-insensitive
    /// substring of title, author, or description, and the category filter
    /// is `"all"` or equals the book's category.
    pub fn matches(&self, book: &Book) -> bool {
        let term = self.search.trim().to_lowercase();
        let search_ok = term.is_empty()
            || book.title.to_lowercase().contains(&term)
            || book.author.to_lowercase().contains(&term)
            || book
                .description
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&term);

        let category = self.category.trim();
        let category_ok = category.is_empty()
            || category == "all"
            || book.category.as_deref() == Some(category);

        search_ok && category_ok
    }

    /// Filtered copy of the base set, preserving its order.
    pub fn apply(&self, books: &[Book]) -> Vec<Book> {
        books
            .iter()
            .filter(|book| self.matches(book))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn book(title: &str, author: &str, category: Option<&str>) -> Book {
        Book {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: title.to_string(),
            author: author.to_string(),
            publisher: "Dhara Publications".to_string(),
            isbn: None,
            description: Some(format!("A study of {}", title.to_lowercase())),
            publication_year: Some(2025),
            edition: None,
            language: "English".to_string(),
            page_count: None,
            category: category.map(str::to_string),
            price: None,
            subject_area: None,
            availability_status: "Available".to_string(),
            cover_image_url: None,
            thumbnail_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn base_set() -> Vec<Book> {
        vec![
            book("Distributed Systems", "A. Engineer", Some("Engineering")),
            book("Systems Biology", "B. Scholar", Some("Science & Technology")),
            book("Contract Law", "C. Counsel", Some("Law")),
            book("Medieval History", "D. Historian", Some("Humanities")),
            book("Market Design", "E. Economist", Some("Business & Economics")),
        ]
    }

    #[test]
    fn test_search_matches_subset_with_category_all() {
        let filter = BookFilter::new("systems", "all");
        let filtered = filter.apply(&base_set());
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|b| b.title.to_lowercase().contains("systems")));
    }

    #[test]
    fn test_empty_search_with_unmatched_category_is_empty() {
        let filter = BookFilter::new("", "Medicine & Healthcare");
        assert!(filter.apply(&base_set()).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_spans_author() {
        let filter = BookFilter::new("SCHOLAR", "all");
        let filtered = filter.apply(&base_set());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].author, "B. Scholar");
    }

    #[test]
    fn test_search_spans_description() {
        let filter = BookFilter::new("study of market", "all");
        assert_eq!(filter.apply(&base_set()).len(), 1);
    }

    #[test]
    fn test_category_and_search_combine() {
        let filter = BookFilter::new("systems", "Engineering");
        let filtered = filter.apply(&base_set());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Distributed Systems");
    }

    #[test]
    fn test_filter_does_not_mutate_base_set() {
        let base = base_set();
        let filter = BookFilter::new("law", "all");
        let _ = filter.apply(&base);
        assert_eq!(base.len(), 5);
    }

    #[test]
    fn test_is_empty() {
        assert!(BookFilter::new("", "all").is_empty());
        assert!(BookFilter::new(" ", "").is_empty());
        assert!(!BookFilter::new("x", "all").is_empty());
        assert!(!BookFilter::new("", "Law").is_empty());
    }
}
