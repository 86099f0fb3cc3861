use std::path::Path;

use brook_core::util::normalize_text_option;
use brook_core::Article;

use crate::cli::AddArgs;
use crate::commands::common::{normalize_url, open_database};
use crate::error::CliError;

pub async fn run_add(args: AddArgs, db_path: &Path) -> Result<(), CliError> {
    let article = article_from_args(args)?;

    let db = open_database(db_path)?;
    db.upsert_article(&article).await?;

    println!("{}", article.url);
    Ok(())
}

pub fn article_from_args(args: AddArgs) -> Result<Article, CliError> {
    let mut article = Article::new(normalize_url(&args.url)?, args.title.trim());
    article.author = args.author.unwrap_or_default().trim().to_string();
    article.published = args.published.unwrap_or_default().trim().to_string();
    article.content = normalize_text_option(args.content);
    article.description = normalize_text_option(args.description);
    article.image = normalize_text_option(args.image);
    article.feed_title = args.feed.unwrap_or_default().trim().to_string();
    Ok(article)
}
