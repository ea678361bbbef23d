//! iced rendering of the view projection.
//!
//! Deliberately thin: everything shown here comes out of `App::project()`,
//! and every interaction goes back through a `Message`. Swapping this file
//! for another toolkit adapter would leave the rest of the crate untouched.

use super::messages::Message;
use super::state::{App, BookDetail, BookPreview, LIST_SCROLL_ID};
use crate::filter;
use crate::theme::{Rgb, Theme};
use iced::widget::{
    Column, button, column, container, horizontal_space, pick_list, row, scrollable, text,
    text_input,
};
use iced::{Background, Color, Element, Length};

const THEMES: [Theme; 2] = [Theme::Day, Theme::Night];

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let projection = self.project();

        let header = row![
            text("Bookrack").size(24),
            horizontal_space(),
            button("Search").on_press(Message::SearchOpened),
            button("Settings").on_press(Message::SettingsOpened),
        ]
        .spacing(10);

        let mut content = column![header].spacing(16).padding(20);

        if self.search_open {
            content = content.push(self.search_panel());
        }
        if self.settings_open {
            content = content.push(self.settings_panel());
        }

        // The detail overlay replaces the list until dismissed.
        let body: Element<'_, Message> = match projection.detail {
            Some(detail) => detail_panel(detail),
            None => {
                let mut tiles = Column::new().spacing(8);
                for preview in &projection.visible {
                    tiles = tiles.push(preview_tile(preview));
                }
                let list = scrollable(tiles)
                    .id(LIST_SCROLL_ID.clone())
                    .height(Length::Fill)
                    .width(Length::Fill);

                let show_more_label = format!("Show more ({})", projection.remaining);
                let show_more = if projection.show_more_disabled {
                    button(text(show_more_label))
                } else {
                    button(text(show_more_label)).on_press(Message::ShowMoreClicked)
                };

                let mut panel = column![].spacing(12);
                if projection.no_results_visible {
                    panel = panel.push(text(
                        "No results found. Your filters might be too narrow.",
                    ));
                }
                panel.push(list).push(show_more).into()
            }
        };
        content = content.push(body);

        let background = token_color(projection.tokens.light);
        let foreground = token_color(projection.tokens.dark);
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(background)),
                text_color: Some(foreground),
                ..container::Style::default()
            })
            .into()
    }

    fn search_panel(&self) -> Element<'_, Message> {
        let authors = select_options(&self.author_options, "All Authors");
        let selected_author = selected_option(&authors, &self.draft.author);
        let genres = select_options(&self.genre_options, "All Genres");
        let selected_genre = selected_option(&genres, &self.draft.genre);

        column![
            text_input("Title", &self.draft.title)
                .on_input(Message::TitleQueryChanged)
                .on_submit(Message::SearchSubmitted),
            row![
                pick_list(authors, selected_author, |opt: SelectOption| {
                    Message::AuthorSelected(opt.id)
                }),
                pick_list(genres, selected_genre, |opt: SelectOption| {
                    Message::GenreSelected(opt.id)
                }),
            ]
            .spacing(8),
            row![
                button("Cancel").on_press(Message::SearchCanceled),
                button("Search").on_press(Message::SearchSubmitted),
            ]
            .spacing(8),
        ]
        .spacing(8)
        .into()
    }

    fn settings_panel(&self) -> Element<'_, Message> {
        column![
            row![
                text("Theme"),
                pick_list(THEMES, Some(self.settings_theme), Message::SettingsThemeChanged),
            ]
            .spacing(8),
            row![
                button("Cancel").on_press(Message::SettingsCanceled),
                button("Save").on_press(Message::SettingsSubmitted),
            ]
            .spacing(8),
        ]
        .spacing(8)
        .into()
    }
}

fn preview_tile(preview: &BookPreview) -> Element<'static, Message> {
    // TODO: decode and render actual covers once the iced `image` feature is
    // enabled; until then the tile shows the cover reference as a caption.
    button(
        column![
            text(preview.title.clone()).size(16),
            text(preview.author_name.clone()).size(13),
            text(preview.image.clone()).size(10),
        ]
        .spacing(2),
    )
    .on_press(Message::PreviewSelected(preview.id.clone()))
    .width(Length::Fill)
    .into()
}

fn detail_panel(detail: BookDetail) -> Element<'static, Message> {
    let subtitle = match detail.year {
        Some(year) => format!("{} ({})", detail.author_name, year),
        None => detail.author_name.clone(),
    };
    column![
        text(detail.title).size(24),
        text(subtitle).size(16),
        text(detail.image).size(10),
        text(detail.description),
        button("Close").on_press(Message::DetailClosed),
    ]
    .spacing(12)
    .into()
}

fn token_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// Dropdown entries: a leading "any" option plus the table contents.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SelectOption {
    id: String,
    label: String,
}

impl std::fmt::Display for SelectOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn select_options(pairs: &[(String, String)], any_label: &str) -> Vec<SelectOption> {
    let mut options = Vec::with_capacity(pairs.len() + 1);
    options.push(SelectOption {
        id: filter::ANY.to_string(),
        label: any_label.to_string(),
    });
    for (id, name) in pairs {
        options.push(SelectOption {
            id: id.clone(),
            label: name.clone(),
        });
    }
    options
}

fn selected_option(options: &[SelectOption], id: &str) -> Option<SelectOption> {
    options.iter().find(|opt| opt.id == id).cloned()
}
