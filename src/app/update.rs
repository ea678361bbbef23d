use super::messages::Message;
use super::state::{App, LIST_SCROLL_ID};
use iced::Task;
use iced::widget::scrollable::{self, RelativeOffset};
use tracing::{debug, info, warn};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchOpened => {
                debug!("Opened search overlay");
                self.search_open = true;
            }
            Message::SearchCanceled => {
                debug!("Closed search overlay");
                self.search_open = false;
            }
            Message::TitleQueryChanged(query) => {
                self.draft.title = query;
            }
            Message::AuthorSelected(author) => {
                debug!(%author, "Author filter drafted");
                self.draft.author = author;
            }
            Message::GenreSelected(genre) => {
                debug!(%genre, "Genre filter drafted");
                self.draft.genre = genre;
            }
            Message::SearchSubmitted => {
                self.run_search();
                self.search_open = false;
                // Matches the original behavior: a new search jumps the list
                // back to the top.
                return scrollable::snap_to(LIST_SCROLL_ID.clone(), RelativeOffset::START);
            }
            Message::ShowMoreClicked => {
                if self.cursor.remaining_count(self.matches.len()) > 0 {
                    self.cursor.advance();
                    info!(
                        page = self.cursor.current_page(),
                        visible = self.cursor.visible_count(self.matches.len()),
                        "Expanded visible window"
                    );
                } else {
                    debug!("Show more clicked with nothing remaining");
                }
            }
            Message::PreviewSelected(id) => {
                if self.catalog.book_by_id(&id).is_some() {
                    info!(%id, "Opened book detail");
                    self.selected = Some(id);
                } else {
                    // Defensive: ids come from rendered previews, so this
                    // should not happen.
                    warn!(%id, "Preview referenced an unknown book id");
                }
            }
            Message::DetailClosed => {
                debug!("Closed book detail");
                self.selected = None;
            }
            Message::SettingsOpened => {
                debug!("Opened settings overlay");
                self.settings_theme = self.theme;
                self.settings_open = true;
            }
            Message::SettingsCanceled => {
                debug!("Closed settings overlay");
                self.settings_open = false;
            }
            Message::SettingsThemeChanged(theme) => {
                self.settings_theme = theme;
            }
            Message::SettingsSubmitted => {
                info!(theme = %self.settings_theme, "Applied theme");
                self.theme = self.settings_theme;
                self.settings_open = false;
            }
        }

        Task::none()
    }
}
