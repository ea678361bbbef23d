mod messages;
mod state;
#[cfg(test)]
mod test_support;
mod update;
mod view;

pub use state::{App, BookDetail, BookPreview, ViewProjection};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use iced::{Size, Theme, window};

/// Launch the browser over the loaded catalog.
pub fn run_app(catalog: Catalog, config: AppConfig, prefers_dark: bool) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width.max(320.0), config.window_height.max(240.0)),
        ..window::Settings::default()
    };

    iced::application("Bookrack", App::update, App::view)
        .window(window_settings)
        .theme(|app: &App| Theme::from(app.current_theme()))
        .run_with(move || App::bootstrap(catalog, config, prefers_dark))
}
