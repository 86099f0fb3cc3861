//! Settings repository implementation

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::models::{Settings, ThemeMode};

/// Trait for settings storage operations
pub trait SettingsRepository {
    /// Load settings, falling back to defaults for missing or malformed rows
    fn load(&self) -> Result<Settings>;

    /// Save settings to the database
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// `SQLite` implementation of `SettingsRepository`
pub struct SqliteSettingsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteSettingsRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn load(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(value) = self.get_setting("theme")? {
            settings.theme = ThemeMode::parse(&value);
        }

        if let Some(value) = self.get_setting("show_banners")? {
            settings.show_banners = matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        if let Some(value) = self.get_setting("font_family")? {
            if !value.trim().is_empty() {
                settings.font_family = value;
            }
        }

        if let Some(size) = self
            .get_setting("font_size")?
            .and_then(|value| value.trim().parse().ok())
        {
            settings.set_font_size(size);
        }

        if let Some(width) = self
            .get_setting("content_width")?
            .and_then(|value| value.trim().parse().ok())
        {
            settings.set_content_width(width);
        }

        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        self.set_setting("theme", settings.theme.as_str())?;
        self.set_setting(
            "show_banners",
            if settings.show_banners {
                "true"
            } else {
                "false"
            },
        )?;
        self.set_setting("font_family", &settings.font_family)?;
        self.set_setting("font_size", &settings.font_size.to_string())?;
        self.set_setting("content_width", &settings.content_width.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use pretty_assertions::assert_eq;

    fn setup() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_load_default_settings() {
        let db = setup();
        let repo = SqliteSettingsRepository::new(db.connection());

        let settings = repo.load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load_settings() {
        let db = setup();
        let repo = SqliteSettingsRepository::new(db.connection());

        let settings = Settings {
            theme: ThemeMode::Dark,
            show_banners: false,
            font_family: "Georgia".to_string(),
            font_size: 18,
            content_width: 900,
        };

        repo.save(&settings).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_malformed_rows_fall_back() {
        let db = setup();
        let repo = SqliteSettingsRepository::new(db.connection());

        repo.set_setting("font_size", "huge").unwrap();
        repo.set_setting("content_width", "5000").unwrap();
        repo.set_setting("theme", "neon").unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.font_size, Settings::default().font_size);
        assert_eq!(loaded.content_width, 1200);
        assert_eq!(loaded.theme, ThemeMode::System);
    }
}
