//! Day/night theming.
//!
//! The two modes swap a single pair of color tokens: night renders light
//! text on a dark surface, day the exact inverse. The initial mode comes
//! from the host's color-scheme preference unless the config pins one.

use iced::Theme as IcedTheme;

/// An RGB color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const PAPER: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
const INK: Rgb = Rgb { r: 10, g: 10, b: 20 };

/// The dark/light token pair applied across the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    /// Foreground (text) color.
    pub dark: Rgb,
    /// Surface (background) color.
    pub light: Rgb,
}

/// Theme selection for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    /// Startup derivation from the host color-scheme preference.
    pub fn from_prefers_dark(prefers_dark: bool) -> Theme {
        if prefers_dark { Theme::Night } else { Theme::Day }
    }

    pub fn tokens(self) -> ColorTokens {
        match self {
            Theme::Night => ColorTokens {
                dark: PAPER,
                light: INK,
            },
            Theme::Day => ColorTokens {
                dark: INK,
                light: PAPER,
            },
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Theme::Day => "Day",
            Theme::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Day => IcedTheme::Light,
            Theme::Night => IcedTheme::Dark,
        }
    }
}
