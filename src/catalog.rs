//! Catalog model and loading.
//!
//! The catalog is a single JSON document holding every book record plus the
//! author and genre lookup tables. It is read once at startup and never
//! mutated afterwards; everything downstream borrows from it.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Display name used when a book references an author missing from the table.
const UNKNOWN_AUTHOR: &str = "Unknown";

/// A single book record as it appears in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Key into the author table.
    pub author: String,
    /// Keys into the genre table, in the order the catalog lists them.
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    /// RFC 3339 publication date-time.
    #[serde(default)]
    pub published: String,
}

impl Book {
    /// Calendar year of publication, if the date string starts with one.
    pub fn published_year(&self) -> Option<i32> {
        let year = self.published.chars().take(4).collect::<String>();
        if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
            year.parse::<i32>().ok()
        } else {
            None
        }
    }
}

/// The full immutable book catalog with its lookup tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    pub books: Vec<Book>,
    #[serde(default)]
    pub authors: HashMap<String, String>,
    #[serde(default)]
    pub genres: HashMap<String, String>,
}

impl Catalog {
    /// Load and parse the catalog JSON from the given path.
    pub fn load(path: &Path) -> Result<Catalog> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let catalog: Catalog = serde_json::from_str(&contents)
            .with_context(|| format!("invalid catalog JSON in {}", path.display()))?;

        let orphaned = catalog
            .books
            .iter()
            .filter(|b| !catalog.authors.contains_key(&b.author))
            .count();
        if orphaned > 0 {
            warn!(orphaned, "Some books reference authors missing from the table");
        }
        info!(
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            genres = catalog.genres.len(),
            path = %path.display(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Exact id lookup over the full catalog, not the filtered set.
    pub fn book_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn author_name(&self, author_id: &str) -> &str {
        self.authors
            .get(author_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Author `(id, display name)` pairs sorted by name for dropdowns.
    pub fn author_options(&self) -> Vec<(String, String)> {
        sorted_options(&self.authors)
    }

    /// Genre `(id, display name)` pairs sorted by name for dropdowns.
    pub fn genre_options(&self) -> Vec<(String, String)> {
        sorted_options(&self.genres)
    }
}

fn sorted_options(table: &HashMap<String, String>) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = table
        .iter()
        .map(|(id, name)| (id.clone(), name.clone()))
        .collect();
    options.sort_by(|a, b| {
        a.1.to_ascii_lowercase()
            .cmp(&b.1.to_ascii_lowercase())
            .then_with(|| a.0.cmp(&b.0))
    });
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        serde_json::from_str(
            r#"{
                "books": [
                    {
                        "id": "1",
                        "title": "Dune",
                        "author": "a1",
                        "genres": ["g1"],
                        "image": "https://example.com/dune.jpg",
                        "description": "Desert planet politics.",
                        "published": "1965-08-01T00:00:00.000Z"
                    },
                    {
                        "id": "2",
                        "title": "Foundation",
                        "author": "a2",
                        "genres": ["g1", "g2"],
                        "published": "not-a-date"
                    }
                ],
                "authors": { "a1": "Frank Herbert", "a2": "Isaac Asimov" },
                "genres": { "g1": "Science Fiction", "g2": "Classics" }
            }"#,
        )
        .expect("sample catalog parses")
    }

    #[test]
    fn looks_up_books_by_id() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.book_by_id("2").map(|b| b.title.as_str()),
            Some("Foundation")
        );
        assert!(catalog.book_by_id("999").is_none());
    }

    #[test]
    fn extracts_publication_year_from_date_prefix() {
        let catalog = sample_catalog();
        assert_eq!(catalog.book_by_id("1").unwrap().published_year(), Some(1965));
        assert_eq!(catalog.book_by_id("2").unwrap().published_year(), None);
    }

    #[test]
    fn unknown_author_falls_back_to_placeholder() {
        let catalog = sample_catalog();
        assert_eq!(catalog.author_name("a1"), "Frank Herbert");
        assert_eq!(catalog.author_name("missing"), "Unknown");
    }

    #[test]
    fn options_are_sorted_by_display_name() {
        let catalog = sample_catalog();
        let authors = catalog.author_options();
        assert_eq!(
            authors,
            vec![
                ("a1".to_string(), "Frank Herbert".to_string()),
                ("a2".to_string(), "Isaac Asimov".to_string()),
            ]
        );
        let genres = catalog.genre_options();
        assert_eq!(genres[0].1, "Classics");
    }
}
