//! Light/dark theme selection and palettes

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Active colour mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggle(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Theme setting from the config file
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    /// Pick the startup mode; `Auto` defers to the host preference
    pub fn resolve(&self, host: ThemeMode) -> ThemeMode {
        match self {
            ThemePreference::Auto => host,
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
        }
    }
}

/// Sample the terminal's colour-scheme preference once.
///
/// Terminals that follow the rxvt convention export `COLORFGBG` as `fg;bg`
/// (or `fg;default;bg`). Without it we assume a dark background.
pub fn detect_host_preference() -> ThemeMode {
    let detected = std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| mode_from_colorfgbg(&value));
    tracing::info!(?detected, "Sampled host colour preference");
    detected.unwrap_or_default()
}

/// Parse a `COLORFGBG` value into a mode
pub fn mode_from_colorfgbg(value: &str) -> Option<ThemeMode> {
    let bg = value.rsplit(';').next()?.trim();
    match bg.parse::<u8>().ok()? {
        0..=6 | 8 => Some(ThemeMode::Dark),
        7 | 9..=15 => Some(ThemeMode::Light),
        _ => None,
    }
}

/// Colours used by every widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub focus: Color,
    pub header_fg: Color,
    pub app_bar_bg: Color,
    pub app_bar_fg: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub primary: Color,
    pub secondary: Color,
    /// Two stops of the "Add User" button gradient (deep purple → blue grey)
    pub accent_start: Color,
    pub accent_end: Color,
    pub error_bg: Color,
    pub error_fg: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Palette {
        match mode {
            ThemeMode::Dark => Palette {
                background: Color::Rgb(18, 18, 18),
                text: Color::White,
                muted: Color::DarkGray,
                border: Color::Gray,
                focus: Color::Yellow,
                header_fg: Color::Cyan,
                app_bar_bg: Color::Rgb(39, 39, 39),
                app_bar_fg: Color::White,
                highlight_bg: Color::Rgb(55, 71, 79),
                highlight_fg: Color::White,
                primary: Color::Rgb(144, 202, 249),
                secondary: Color::Rgb(206, 147, 216),
                accent_start: Color::Rgb(103, 58, 183),
                accent_end: Color::Rgb(96, 125, 139),
                error_bg: Color::Rgb(211, 47, 47),
                error_fg: Color::White,
            },
            ThemeMode::Light => Palette {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                border: Color::DarkGray,
                focus: Color::Blue,
                header_fg: Color::Rgb(25, 118, 210),
                app_bar_bg: Color::Rgb(25, 118, 210),
                app_bar_fg: Color::White,
                highlight_bg: Color::Rgb(207, 216, 220),
                highlight_fg: Color::Black,
                primary: Color::Rgb(25, 118, 210),
                secondary: Color::Rgb(156, 39, 176),
                accent_start: Color::Rgb(103, 58, 183),
                accent_end: Color::Rgb(96, 125, 139),
                error_bg: Color::Rgb(211, 47, 47),
                error_fg: Color::White,
            },
        }
    }
}
