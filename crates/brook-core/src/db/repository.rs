//! Article repository implementation

#![allow(clippy::cast_possible_wrap)] // SQLite uses i64 for LIMIT/OFFSET

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::models::{Article, StarStatus};

const ARTICLE_COLUMNS: &str = "url, title, author, published, content, description, image, \
                               star_status, feed_title, created_at";

/// Trait for article storage operations
pub trait ArticleRepository {
    /// Get an article by URL
    fn get(&self, url: &str) -> Result<Option<Article>>;

    /// List articles, newest first
    fn list(&self, limit: usize, offset: usize) -> Result<Vec<Article>>;

    /// List starred articles, newest first
    fn list_starred(&self, limit: usize, offset: usize) -> Result<Vec<Article>>;

    /// Insert an article or refresh its feed fields
    ///
    /// An existing row keeps its star status and insertion time.
    fn upsert(&self, article: &Article) -> Result<()>;

    /// Persist the star flag for an article
    fn set_star_status(&self, url: &str, status: StarStatus) -> Result<()>;
}

/// `SQLite` implementation of `ArticleRepository`
pub struct SqliteArticleRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteArticleRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse an article from a database row
    fn parse_article(row: &rusqlite::Row<'_>) -> rusqlite::Result<Article> {
        Ok(Article {
            url: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            published: row.get(3)?,
            content: row.get(4)?,
            description: row.get(5)?,
            image: row.get(6)?,
            star_status: StarStatus::from(row.get::<_, i64>(7)?),
            feed_title: row.get(8)?,
            created_at: row.get(9)?,
        })
    }

    fn query_list(&self, sql: &str, limit: usize, offset: usize) -> Result<Vec<Article>> {
        let mut stmt = self.conn.prepare(sql)?;
        let articles = stmt
            .query_map(params![limit as i64, offset as i64], Self::parse_article)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(articles)
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn get(&self, url: &str) -> Result<Option<Article>> {
        let article = self
            .conn
            .query_row(
                &format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE url = ?"),
                params![url],
                Self::parse_article,
            )
            .optional()?;
        Ok(article)
    }

    fn list(&self, limit: usize, offset: usize) -> Result<Vec<Article>> {
        self.query_list(
            &format!(
                "SELECT {ARTICLE_COLUMNS} FROM articles
                 ORDER BY created_at DESC, url ASC
                 LIMIT ? OFFSET ?"
            ),
            limit,
            offset,
        )
    }

    fn list_starred(&self, limit: usize, offset: usize) -> Result<Vec<Article>> {
        self.query_list(
            &format!(
                "SELECT {ARTICLE_COLUMNS} FROM articles
                 WHERE star_status = 1
                 ORDER BY created_at DESC, url ASC
                 LIMIT ? OFFSET ?"
            ),
            limit,
            offset,
        )
    }

    fn upsert(&self, article: &Article) -> Result<()> {
        let url = article.url.trim();
        if url.is_empty() {
            return Err(Error::InvalidInput("Article URL cannot be empty".into()));
        }

        self.conn.execute(
            "INSERT INTO articles (url, title, author, published, content, description, image,
                                   star_status, feed_title, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(url) DO UPDATE SET
                title = excluded.title,
                author = excluded.author,
                published = excluded.published,
                content = excluded.content,
                description = excluded.description,
                image = excluded.image,
                feed_title = excluded.feed_title",
            params![
                url,
                article.title,
                article.author,
                article.published,
                article.content,
                article.description,
                article.image,
                article.star_status.as_i64(),
                article.feed_title,
                article.created_at,
            ],
        )?;
        tracing::debug!("Upserted article {}", url);
        Ok(())
    }

    fn set_star_status(&self, url: &str, status: StarStatus) -> Result<()> {
        let updated = self.conn.execute(
            "UPDATE articles SET star_status = ? WHERE url = ?",
            params![status.as_i64(), url],
        )?;

        if updated == 0 {
            return Err(Error::NotFound(url.to_string()));
        }
        tracing::debug!("Set star_status={} for {}", status, url);
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

    fn article(url: &str, created_at: i64) -> Article {
        let mut article = Article::new(url, format!("Title for {url}"));
        article.created_at = created_at;
        article.content = Some("<p>body</p>".to_string());
        article
    }

    #[test]
    fn test_upsert_and_get() {
        let db = setup();
        let repo = SqliteArticleRepository::new(db.connection());

        let mut original = article("https://example.com/a", 10);
        original.image = Some("https://cdn/x/banner.png".to_string());
        original.feed_title = "Example".to_string();
        repo.upsert(&original).unwrap();

        let loaded = repo.get("https://example.com/a").unwrap().unwrap();
        assert_eq!(loaded, original);
        assert_eq!(repo.get("https://example.com/missing").unwrap(), None);
    }

    #[test]
    fn test_upsert_keeps_star_status() {
        let db = setup();
        let repo = SqliteArticleRepository::new(db.connection());

        repo.upsert(&article("https://example.com/a", 10)).unwrap();
        repo.set_star_status("https://example.com/a", StarStatus::Starred)
            .unwrap();

        let mut refreshed = article("https://example.com/a", 99);
        refreshed.title = "New title".to_string();
        repo.upsert(&refreshed).unwrap();

        let loaded = repo.get("https://example.com/a").unwrap().unwrap();
        assert_eq!(loaded.title, "New title");
        assert_eq!(loaded.star_status, StarStatus::Starred);
        assert_eq!(loaded.created_at, 10);
    }

    #[test]
    fn test_list_newest_first() {
        let db = setup();
        let repo = SqliteArticleRepository::new(db.connection());

        repo.upsert(&article("https://example.com/old", 1)).unwrap();
        repo.upsert(&article("https://example.com/new", 3)).unwrap();
        repo.upsert(&article("https://example.com/mid", 2)).unwrap();

        let urls: Vec<String> = repo
            .list(10, 0)
            .unwrap()
            .into_iter()
            .map(|a| a.url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://example.com/new",
                "https://example.com/mid",
                "https://example.com/old"
            ]
        );

        assert_eq!(repo.list(1, 1).unwrap()[0].url, "https://example.com/mid");
    }

    #[test]
    fn test_star_and_unstar() {
        let db = setup();
        let repo = SqliteArticleRepository::new(db.connection());

        repo.upsert(&article("https://example.com/a", 1)).unwrap();
        repo.upsert(&article("https://example.com/b", 2)).unwrap();

        repo.set_star_status("https://example.com/a", StarStatus::Starred)
            .unwrap();
        let starred = repo.list_starred(10, 0).unwrap();
        assert_eq!(starred.len(), 1);
        assert_eq!(starred[0].url, "https://example.com/a");

        repo.set_star_status("https://example.com/a", StarStatus::Unstarred)
            .unwrap();
        assert!(repo.list_starred(10, 0).unwrap().is_empty());
    }

    #[test]
    fn test_star_unknown_url_is_not_found() {
        let db = setup();
        let repo = SqliteArticleRepository::new(db.connection());

        let err = repo
            .set_star_status("https://example.com/missing", StarStatus::Starred)
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_upsert_rejects_empty_url() {
        let db = setup();
        let repo = SqliteArticleRepository::new(db.connection());

        let err = repo.upsert(&article("  ", 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
