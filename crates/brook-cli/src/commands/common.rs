use std::path::Path;

use brook_core::services::DatabaseService;
use brook_core::util::{format_published, is_http_url};
use brook_core::{Article, ArticleDisplay};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct ArticleListItem {
    pub url: String,
    pub title: String,
    pub feed_title: String,
    pub published: String,
    pub starred: bool,
    pub created_at: i64,
}

/// An article as the reader would render it
#[derive(Debug, Serialize)]
pub struct ArticleShowItem {
    pub url: String,
    pub title: String,
    pub author: String,
    pub published: String,
    pub starred: bool,
    pub banner: Option<String>,
    pub content: String,
}

pub fn open_database(path: &Path) -> Result<DatabaseService, CliError> {
    Ok(DatabaseService::open_path(path)?)
}

pub fn normalize_url(url: &str) -> Result<String, CliError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyUrl);
    }
    if !is_http_url(trimmed) {
        return Err(CliError::InvalidUrl(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

pub async fn list_articles(
    limit: usize,
    starred: bool,
    db_path: &Path,
) -> Result<Vec<Article>, CliError> {
    let db = open_database(db_path)?;
    if starred {
        Ok(db.list_starred(limit, 0).await?)
    } else {
        Ok(db.list_articles(limit, 0).await?)
    }
}

pub async fn find_article(url: &str, db: &DatabaseService) -> Result<Article, CliError> {
    let url = normalize_url(url)?;
    db.get_article(&url)
        .await?
        .ok_or(CliError::ArticleNotFound(url))
}

pub fn format_article_lines(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .map(|article| {
            let star = if article.is_starred() { '*' } else { ' ' };
            let title = truncate(article.display_title(), 50);
            let published = format_published(&article.published);
            format!("{star} {title:<50}  {published:<16}  {}", article.url)
        })
        .collect()
}

pub fn article_to_list_item(article: &Article) -> ArticleListItem {
    ArticleListItem {
        url: article.url.clone(),
        title: article.display_title().to_string(),
        feed_title: article.feed_title.clone(),
        published: format_published(&article.published),
        starred: article.is_starred(),
        created_at: article.created_at,
    }
}

pub fn article_to_show_item(article: &Article) -> ArticleShowItem {
    let display = ArticleDisplay::from_article(article);
    ArticleShowItem {
        url: article.url.clone(),
        title: article.display_title().to_string(),
        author: article.author.clone(),
        published: format_published(&article.published),
        starred: article.is_starred(),
        banner: display.banner,
        content: display.content,
    }
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}
