//! Shared database service wrapper used by the desktop app and CLI.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::db::{
    ArticleRepository, Database, SettingsRepository, SqliteArticleRepository,
    SqliteSettingsRepository,
};
use crate::models::{Article, Settings, StarStatus};
use crate::Result;

/// Thread-safe service for DB and repository operations.
#[derive(Clone)]
pub struct DatabaseService {
    db: Arc<Mutex<Database>>,
    db_path: Option<PathBuf>,
}

impl DatabaseService {
    /// Open a database service at the given filesystem path.
    pub fn open_path(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&db_path)?;
        tracing::info!("Article store ready at {}", db_path.display());
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            db_path: Some(db_path),
        })
    }

    /// Open an in-memory database service (primarily for tests).
    pub fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            db_path: None,
        })
    }

    /// Filesystem path, `None` for in-memory stores.
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// List articles, newest first.
    pub async fn list_articles(&self, limit: usize, offset: usize) -> Result<Vec<Article>> {
        let db = self.db.lock().await;
        SqliteArticleRepository::new(db.connection()).list(limit, offset)
    }

    /// List starred articles, newest first.
    pub async fn list_starred(&self, limit: usize, offset: usize) -> Result<Vec<Article>> {
        let db = self.db.lock().await;
        SqliteArticleRepository::new(db.connection()).list_starred(limit, offset)
    }

    /// Get an article by URL.
    pub async fn get_article(&self, url: &str) -> Result<Option<Article>> {
        let db = self.db.lock().await;
        SqliteArticleRepository::new(db.connection()).get(url)
    }

    /// Insert or refresh an article.
    pub async fn upsert_article(&self, article: &Article) -> Result<()> {
        let db = self.db.lock().await;
        SqliteArticleRepository::new(db.connection()).upsert(article)
    }

    /// Insert or refresh a batch of articles in a single transaction.
    ///
    /// Nothing is written if any article is rejected.
    pub async fn upsert_articles(&self, articles: &[Article]) -> Result<usize> {
        let mut db = self.db.lock().await;
        let tx = db.connection_mut().transaction()?;
        {
            let repo = SqliteArticleRepository::new(&tx);
            for article in articles {
                repo.upsert(article)?;
            }
        }
        tx.commit()?;
        tracing::debug!("Upserted {} articles", articles.len());
        Ok(articles.len())
    }

    /// Persist the star flag for the article at `url`.
    pub async fn star_article(&self, url: &str, status: StarStatus) -> Result<()> {
        let db = self.db.lock().await;
        SqliteArticleRepository::new(db.connection()).set_star_status(url, status)
    }

    /// Load settings from database.
    pub async fn load_settings(&self) -> Result<Settings> {
        let db = self.db.lock().await;
        SqliteSettingsRepository::new(db.connection()).load()
    }

    /// Save settings to database.
    pub async fn save_settings(&self, settings: &Settings) -> Result<()> {
        let db = self.db.lock().await;
        SqliteSettingsRepository::new(db.connection()).save(settings)
    }
}
