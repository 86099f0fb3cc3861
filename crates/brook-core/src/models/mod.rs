//! Data models for Brook

mod article;
mod settings;

pub use article::{Article, StarStatus};
pub use settings::{
    Settings, SettingsTab, ThemeMode, MAX_CONTENT_WIDTH, MAX_FONT_SIZE, MIN_CONTENT_WIDTH,
    MIN_FONT_SIZE,
};
