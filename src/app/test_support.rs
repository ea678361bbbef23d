//! Shared fixtures for the app-level test modules.

use super::state::App;
use crate::catalog::Catalog;
use crate::config::AppConfig;

pub(crate) fn sample_catalog() -> Catalog {
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
                    "genres": ["g2"],
                    "published": "1951-06-01T00:00:00.000Z"
                },
                {
                    "id": "3",
                    "title": "Dune Messiah",
                    "author": "a1",
                    "genres": ["g1", "g3"],
                    "published": "1969-07-01T00:00:00.000Z"
                },
                {
                    "id": "4",
                    "title": "Emma",
                    "author": "a3",
                    "genres": ["g4"],
                    "published": "1815-12-23T00:00:00.000Z"
                },
                {
                    "id": "5",
                    "title": "Hyperion",
                    "author": "a4",
                    "genres": ["g2"],
                    "published": "1989-05-26T00:00:00.000Z"
                }
            ],
            "authors": {
                "a1": "Frank Herbert",
                "a2": "Isaac Asimov",
                "a3": "Jane Austen",
                "a4": "Dan Simmons"
            },
            "genres": {
                "g1": "Science Fiction",
                "g2": "Classics",
                "g3": "Sequels",
                "g4": "Romance"
            }
        }"#,
    )
    .expect("sample catalog parses")
}

/// App over the five-book sample catalog, day theme, given page size.
pub(crate) fn test_app(page_size: usize) -> App {
    let config = AppConfig {
        books_per_page: page_size,
        ..AppConfig::default()
    };
    let (app, _task) = App::bootstrap(sample_catalog(), config, false);
    app
}
