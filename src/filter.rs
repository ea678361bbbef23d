//! Catalog filtering.
//!
//! A search submission is compiled into a [`FilterCriteria`] and evaluated
//! over the whole catalog in one pass. The result is a list of indices into
//! the catalog, in catalog order; the filter never re-sorts and never fails.

use crate::catalog::Book;

/// Sentinel dropdown value meaning "no constraint on this field".
pub const ANY: &str = "any";

/// User-specified constraints narrowing the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive title substring; empty means unconstrained.
    pub title_query: String,
    /// Author id, or [`ANY`].
    pub author: String,
    /// Genre id, or [`ANY`]. Matches via membership in a book's genre list.
    pub genre: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            title_query: String::new(),
            author: ANY.to_string(),
            genre: ANY.to_string(),
        }
    }
}

impl FilterCriteria {
    pub fn matches(&self, book: &Book) -> bool {
        let title_match = self.title_query.is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title_query.to_lowercase());
        let author_match = self.author == ANY || book.author == self.author;
        let genre_match = self.genre == ANY || book.genres.iter().any(|g| *g == self.genre);
        title_match && author_match && genre_match
    }
}

/// Indices of all books matching `criteria`, preserving catalog order.
pub fn filter(books: &[Book], criteria: &FilterCriteria) -> Vec<usize> {
    books
        .iter()
        .enumerate()
        .filter(|(_, book)| criteria.matches(book))
        .map(|(idx, _)| idx)
        .collect()
}
