use crate::theme::Theme;

/// Typed intents emitted by the UI.
///
/// Raw widget events are translated into these before the reducer sees
/// anything, so the core state never touches event-loop concerns.
#[derive(Debug, Clone)]
pub enum Message {
    SearchOpened,
    SearchCanceled,
    TitleQueryChanged(String),
    AuthorSelected(String),
    GenreSelected(String),
    /// Search form submitted: rebuild criteria from the draft fields.
    SearchSubmitted,
    ShowMoreClicked,
    /// A preview tile was clicked; carries the book id.
    PreviewSelected(String),
    DetailClosed,
    SettingsOpened,
    SettingsCanceled,
    SettingsThemeChanged(Theme),
    /// Settings form submitted: apply the drafted theme.
    SettingsSubmitted,
}
