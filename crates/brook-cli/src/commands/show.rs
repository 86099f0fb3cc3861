use std::path::Path;

use crate::commands::common::{article_to_show_item, find_article, open_database};
use crate::error::CliError;

pub async fn run_show(url: &str, as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let article = find_article(url, &db).await?;
    let item = article_to_show_item(&article);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&item)?);
        return Ok(());
    }

    println!("{}", item.title);
    println!("{}", item.url);
    if !item.author.is_empty() {
        println!("by {}", item.author);
    }
    if !item.published.is_empty() {
        println!("{}", item.published);
    }
    println!("starred: {}", if item.starred { "yes" } else { "no" });
    match &item.banner {
        Some(banner) => println!("banner: {banner}"),
        None => println!("banner: hidden"),
    }
    println!();
    println!("{}", item.content);
    Ok(())
}
