use std::path::Path;

use crate::commands::common::{
    article_to_list_item, format_article_lines, list_articles, ArticleListItem,
};
use crate::error::CliError;

pub async fn run_list(
    limit: usize,
    starred: bool,
    as_json: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    let articles = list_articles(limit, starred, db_path).await?;

    if as_json {
        let json_items = articles
            .iter()
            .map(article_to_list_item)
            .collect::<Vec<ArticleListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_article_lines(&articles) {
            println!("{line}");
        }
    }

    Ok(())
}
