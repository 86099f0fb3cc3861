//! Application settings model

use serde::{Deserialize, Serialize};

/// Smallest reading font size in pixels
pub const MIN_FONT_SIZE: u32 = 10;
/// Largest reading font size in pixels
pub const MAX_FONT_SIZE: u32 = 24;
/// Narrowest reading column in pixels
pub const MIN_CONTENT_WIDTH: u32 = 480;
/// Widest reading column in pixels
pub const MAX_CONTENT_WIDTH: u32 = 1200;

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    #[default]
    System,
}

impl ThemeMode {
    /// Value used by the theme select control and the settings table
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Unknown values fall back to `System`
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::System,
        }
    }
}

/// Tabs of the settings modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Editor,
}

impl SettingsTab {
    /// Sidebar order
    pub const ALL: [Self; 2] = [Self::General, Self::Editor];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Editor => "Editor",
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Theme mode (General tab)
    pub theme: ThemeMode,
    /// Show hero banner images above article content
    pub show_banners: bool,
    /// Font family for article content (Editor tab)
    pub font_family: String,
    /// Font size in pixels
    pub font_size: u32,
    /// Maximum width of the reading column in pixels
    pub content_width: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            show_banners: true,
            font_family: "system-ui".to_string(),
            font_size: 16,
            content_width: 720,
        }
    }
}

impl Settings {
    /// Set the font size, clamped to the supported range
    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// Set the reading column width, clamped to the supported range
    pub fn set_content_width(&mut self, width: u32) {
        self.content_width = width.clamp(MIN_CONTENT_WIDTH, MAX_CONTENT_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.theme, ThemeMode::System);
        assert!(settings.show_banners);
    }

    #[test]
    fn font_size_and_width_are_clamped() {
        let mut settings = Settings::default();
        settings.set_font_size(4);
        assert_eq!(settings.font_size, MIN_FONT_SIZE);
        settings.set_font_size(99);
        assert_eq!(settings.font_size, MAX_FONT_SIZE);
        settings.set_content_width(100);
        assert_eq!(settings.content_width, MIN_CONTENT_WIDTH);
        settings.set_content_width(900);
        assert_eq!(settings.content_width, 900);
    }

    #[test]
    fn theme_mode_parse_falls_back_to_system() {
        assert_eq!(ThemeMode::parse("Dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse(" light "), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("sepia"), ThemeMode::System);
    }

    #[test]
    fn settings_tab_starts_on_general() {
        assert_eq!(SettingsTab::default(), SettingsTab::General);
        assert_eq!(SettingsTab::ALL[1].label(), "Editor");
    }
}
