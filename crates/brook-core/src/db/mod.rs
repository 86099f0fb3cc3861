//! Local article store for Brook

mod connection;
mod migrations;
mod repository;
mod settings_repository;

pub use connection::Database;
pub use repository::{ArticleRepository, SqliteArticleRepository};
pub use settings_repository::{SettingsRepository, SqliteSettingsRepository};
