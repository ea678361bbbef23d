use crate::catalog::Catalog;
use crate::config::{AppConfig, ThemePreference};
use crate::filter::{self, FilterCriteria};
use crate::pagination::{self, PageCursor};
use crate::theme::{ColorTokens, Theme};
use iced::Task;
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use tracing::info;

use super::messages::Message;

pub(crate) static LIST_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("book-list"));

/// Core application state.
///
/// Four pieces of state mutate over a session (criteria, cursor, selection,
/// theme); the catalog and its lookup tables are frozen at bootstrap. The
/// draft fields hold in-progress form input that only becomes criteria or
/// theme on submit.
pub struct App {
    pub(super) catalog: Catalog,
    pub(super) criteria: FilterCriteria,
    /// Indices into `catalog.books`, in catalog order.
    pub(super) matches: Vec<usize>,
    pub(super) cursor: PageCursor,
    /// Id of the book shown in the detail overlay, if any.
    pub(super) selected: Option<String>,
    pub(super) theme: Theme,
    pub(super) search_open: bool,
    pub(super) settings_open: bool,
    pub(super) draft: SearchDraft,
    pub(super) settings_theme: Theme,
    pub(super) author_options: Vec<(String, String)>,
    pub(super) genre_options: Vec<(String, String)>,
}

/// In-progress search form fields.
#[derive(Debug, Clone)]
pub(super) struct SearchDraft {
    pub(super) title: String,
    pub(super) author: String,
    pub(super) genre: String,
}

impl Default for SearchDraft {
    fn default() -> Self {
        SearchDraft {
            title: String::new(),
            author: filter::ANY.to_string(),
            genre: filter::ANY.to_string(),
        }
    }
}

/// Render-ready description of one list tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPreview {
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub image: String,
}

/// Render-ready description of the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub title: String,
    pub author_name: String,
    pub year: Option<i32>,
    pub description: String,
    pub image: String,
}

/// Everything the presentation layer needs, recomputed on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewProjection {
    pub visible: Vec<BookPreview>,
    pub remaining: usize,
    pub show_more_disabled: bool,
    pub no_results_visible: bool,
    pub tokens: ColorTokens,
    pub detail: Option<BookDetail>,
}

impl App {
    pub(super) fn bootstrap(
        catalog: Catalog,
        config: AppConfig,
        prefers_dark: bool,
    ) -> (App, Task<Message>) {
        let theme = match config.theme {
            ThemePreference::Auto => Theme::from_prefers_dark(prefers_dark),
            ThemePreference::Day => Theme::Day,
            ThemePreference::Night => Theme::Night,
        };
        // Before any search, every book matches.
        let matches: Vec<usize> = (0..catalog.books.len()).collect();
        let author_options = catalog.author_options();
        let genre_options = catalog.genre_options();

        let app = App {
            matches,
            criteria: FilterCriteria::default(),
            cursor: PageCursor::new(config.books_per_page),
            selected: None,
            theme,
            search_open: false,
            settings_open: false,
            draft: SearchDraft::default(),
            settings_theme: theme,
            author_options,
            genre_options,
            catalog,
        };

        info!(
            books = app.catalog.books.len(),
            page_size = app.cursor.page_size(),
            theme = %app.theme,
            "Initialized app state"
        );
        (app, Task::none())
    }

    /// Compile the draft fields into criteria, refilter, and rewind the
    /// cursor. The only place the result set is ever replaced.
    pub(super) fn run_search(&mut self) {
        self.criteria = FilterCriteria {
            title_query: self.draft.title.trim().to_string(),
            author: self.draft.author.clone(),
            genre: self.draft.genre.clone(),
        };
        self.matches = filter::filter(&self.catalog.books, &self.criteria);
        self.cursor.reset();
        info!(
            matches = self.matches.len(),
            title_query = %self.criteria.title_query,
            author = %self.criteria.author,
            genre = %self.criteria.genre,
            "Applied search filter"
        );
    }

    fn preview(&self, book_idx: usize) -> BookPreview {
        let book = &self.catalog.books[book_idx];
        BookPreview {
            id: book.id.clone(),
            title: book.title.clone(),
            author_name: self.catalog.author_name(&book.author).to_string(),
            image: book.image.clone(),
        }
    }

    fn detail(&self) -> Option<BookDetail> {
        let id = self.selected.as_deref()?;
        let book = self.catalog.book_by_id(id)?;
        Some(BookDetail {
            title: book.title.clone(),
            author_name: self.catalog.author_name(&book.author).to_string(),
            year: book.published_year(),
            description: book.description.clone(),
            image: book.image.clone(),
        })
    }

    /// Applied theme, for the toolkit-level palette switch.
    pub fn current_theme(&self) -> Theme {
        self.theme
    }

    /// Combine catalog, criteria, cursor, selection, and theme into a
    /// render-ready description. Pure; called once per view pass.
    pub fn project(&self) -> ViewProjection {
        let visible = pagination::slice(&self.matches, &self.cursor)
            .iter()
            .map(|&idx| self.preview(idx))
            .collect();
        let remaining = self.cursor.remaining_count(self.matches.len());

        ViewProjection {
            visible,
            remaining,
            show_more_disabled: remaining == 0,
            no_results_visible: self.matches.is_empty(),
            tokens: self.theme.tokens(),
            detail: self.detail(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{sample_catalog, test_app};

    #[test]
    fn initial_projection_shows_first_page_of_full_catalog() {
        let app = test_app(2);
        let projection = app.project();
        assert_eq!(projection.visible.len(), 2);
        assert_eq!(projection.visible[0].title, "Dune");
        assert_eq!(projection.visible[0].author_name, "Frank Herbert");
        assert_eq!(projection.remaining, 3);
        assert!(!projection.show_more_disabled);
        assert!(!projection.no_results_visible);
        assert!(projection.detail.is_none());
    }

    #[test]
    fn empty_result_set_raises_no_results_flag() {
        let mut app = test_app(2);
        app.draft.title = "zzz".to_string();
        app.run_search();
        let projection = app.project();
        assert!(projection.visible.is_empty());
        assert!(projection.no_results_visible);
        assert!(projection.show_more_disabled);
        assert_eq!(projection.remaining, 0);
    }

    #[test]
    fn detail_projects_author_name_and_year() {
        let mut app = test_app(2);
        app.selected = Some("1".to_string());
        let detail = app.project().detail.expect("detail present");
        assert_eq!(detail.title, "Dune");
        assert_eq!(detail.author_name, "Frank Herbert");
        assert_eq!(detail.year, Some(1965));
    }

    #[test]
    fn selection_resolves_against_full_catalog_not_filtered_set() {
        let mut app = test_app(2);
        app.draft.title = "foundation".to_string();
        app.run_search();
        // "Dune" is filtered out of the list but stays resolvable.
        app.selected = Some("1".to_string());
        let detail = app.project().detail.expect("detail present");
        assert_eq!(detail.title, "Dune");
    }

    #[test]
    fn projection_tokens_follow_theme() {
        let mut app = test_app(2);
        app.theme = Theme::Night;
        assert_eq!(app.project().tokens, Theme::Night.tokens());
    }

    #[test]
    fn bootstrap_honors_theme_preference_over_host() {
        let config = AppConfig {
            theme: ThemePreference::Day,
            books_per_page: 2,
            ..AppConfig::default()
        };
        let (app, _task) = App::bootstrap(sample_catalog(), config, true);
        assert_eq!(app.theme, Theme::Day);

        let config = AppConfig {
            books_per_page: 2,
            ..AppConfig::default()
        };
        let (app, _task) = App::bootstrap(sample_catalog(), config, true);
        assert_eq!(app.theme, Theme::Night);
    }
}
