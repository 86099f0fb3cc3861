use std::path::Path;

use brook_core::util::unix_millis_now;
use brook_core::Article;

use crate::commands::common::{normalize_url, open_database};
use crate::error::CliError;

pub async fn run_import(path: &Path, db_path: &Path) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(path)?;
    let articles = parse_import(&raw)?;

    let db = open_database(db_path)?;
    let imported = db.upsert_articles(&articles).await?;

    tracing::info!("Imported {} articles from {}", imported, path.display());
    println!("Imported {imported} articles");
    Ok(())
}

/// Parse a JSON array of articles, validating URLs before anything is written
pub fn parse_import(raw: &str) -> Result<Vec<Article>, CliError> {
    let mut articles: Vec<Article> = serde_json::from_str(raw)?;
    let now = unix_millis_now();

    for article in &mut articles {
        article.url = normalize_url(&article.url)?;
        if article.created_at == 0 {
            article.created_at = now;
        }
    }

    Ok(articles)
}
