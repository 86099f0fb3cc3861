//! Article model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary "favorite" flag stored as an integer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum StarStatus {
    #[default]
    Unstarred,
    Starred,
}

impl StarStatus {
    /// Integer form persisted in the store (0 or 1)
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Unstarred => 0,
            Self::Starred => 1,
        }
    }

    /// `1 - status`
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Unstarred => Self::Starred,
            Self::Starred => Self::Unstarred,
        }
    }

    #[must_use]
    pub const fn is_starred(self) -> bool {
        matches!(self, Self::Starred)
    }
}

/// Only an exact 1 counts as starred.
impl From<i64> for StarStatus {
    fn from(value: i64) -> Self {
        if value == 1 {
            Self::Starred
        } else {
            Self::Unstarred
        }
    }
}

impl From<StarStatus> for i64 {
    fn from(status: StarStatus) -> Self {
        status.as_i64()
    }
}

impl fmt::Display for StarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// A feed entry, keyed by its URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Canonical link to the original article (unique key)
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Publish timestamp as delivered by the feed; may be empty
    #[serde(default)]
    pub published: String,
    /// Full HTML body, when the feed provides one
    #[serde(default)]
    pub content: Option<String>,
    /// Summary HTML used when `content` is missing
    #[serde(default)]
    pub description: Option<String>,
    /// Hero image URL
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub star_status: StarStatus,
    /// Title of the feed the article came from
    #[serde(default)]
    pub feed_title: String,
    /// Insertion timestamp (Unix ms)
    #[serde(default)]
    pub created_at: i64,
}

impl Article {
    /// Create an unstarred article with just a URL and title
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            author: String::new(),
            published: String::new(),
            content: None,
            description: None,
            image: None,
            star_status: StarStatus::Unstarred,
            feed_title: String::new(),
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Body markup: content, then description, then empty
    #[must_use]
    pub fn body(&self) -> &str {
        self.content
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or("")
    }

    #[must_use]
    pub const fn is_starred(&self) -> bool {
        self.star_status.is_starred()
    }

    /// Title with a fallback for feeds that omit it
    #[must_use]
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            &self.url
        } else {
            title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn star_status_from_integer() {
        assert_eq!(StarStatus::from(1), StarStatus::Starred);
        assert_eq!(StarStatus::from(0), StarStatus::Unstarred);
        assert_eq!(StarStatus::from(7), StarStatus::Unstarred);
        assert_eq!(StarStatus::Starred.flipped().as_i64(), 0);
        assert_eq!(StarStatus::Unstarred.flipped().as_i64(), 1);
    }

    #[test]
    fn body_prefers_content_then_description() {
        let mut article = Article::new("https://example.com/a", "A");
        assert_eq!(article.body(), "");

        article.description = Some("<p>summary</p>".to_string());
        assert_eq!(article.body(), "<p>summary</p>");

        article.content = Some("<p>full</p>".to_string());
        assert_eq!(article.body(), "<p>full</p>");
    }

    #[test]
    fn deserializes_integer_star_status() {
        let article: Article = serde_json::from_str(
            r#"{"url": "https://example.com/a", "title": "A", "star_status": 1}"#,
        )
        .unwrap();
        assert!(article.is_starred());
        assert_eq!(article.image, None);

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["star_status"], 1);
    }

    #[test]
    fn display_title_falls_back_to_url() {
        let article = Article::new("https://example.com/a", "  ");
        assert_eq!(article.display_title(), "https://example.com/a");
    }
}
