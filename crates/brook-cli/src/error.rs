use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] brook_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Article URL cannot be empty")]
    EmptyUrl,
    #[error("Not an http(s) URL: {0}")]
    InvalidUrl(String),
    #[error("Article not found: {0}")]
    ArticleNotFound(String),
}
