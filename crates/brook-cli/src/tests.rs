use std::path::PathBuf;

use brook_core::services::DatabaseService;
use brook_core::{Article, StarStatus};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::cli::AddArgs;
use crate::commands::add::{article_from_args, run_add};
use crate::commands::common::{
    article_to_show_item, find_article, format_article_lines, list_articles, normalize_url,
    truncate,
};
use crate::commands::import::{parse_import, run_import};
use crate::commands::star::run_star;
use crate::error::CliError;

fn temp_db() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("brook.db");
    (dir, path)
}

#[test]
fn normalize_url_trims_and_requires_http() {
    assert_eq!(
        normalize_url("  https://example.com/a  ").unwrap(),
        "https://example.com/a"
    );
    assert!(matches!(normalize_url(" \n "), Err(CliError::EmptyUrl)));
    assert!(matches!(
        normalize_url("ftp://example.com"),
        Err(CliError::InvalidUrl(_))
    ));
}

#[test]
fn article_from_args_drops_blank_optionals() {
    let article = article_from_args(AddArgs {
        url: "https://example.com/post".to_string(),
        title: " Post ".to_string(),
        content: Some("  ".to_string()),
        description: Some("<p>Summary</p>".to_string()),
        feed: Some("Example".to_string()),
        ..AddArgs::default()
    })
    .unwrap();

    assert_eq!(article.title, "Post");
    assert_eq!(article.content, None);
    assert_eq!(article.body(), "<p>Summary</p>");
    assert_eq!(article.feed_title, "Example");
    assert_eq!(article.star_status, StarStatus::Unstarred);
}

#[test]
fn truncate_adds_ellipsis() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(
        truncate("This is a very long sentence that should be shortened", 20),
        "This is a very lo..."
    );
}

#[test]
fn format_article_lines_marks_starred() {
    let mut starred = Article::new("https://example.com/s", "Starred one");
    starred.star_status = StarStatus::Starred;
    starred.published = "2024-03-01T08:30:00Z".to_string();
    let plain = Article::new("https://example.com/p", "");

    let lines = format_article_lines(&[starred, plain]);
    assert!(lines[0].starts_with("* Starred one"));
    assert!(lines[0].contains("2024-03-01 08:30"));
    assert!(lines[1].starts_with("  https://example.com/p"));
}

#[test]
fn parse_import_fills_defaults_and_validates() {
    let articles = parse_import(
        r#"[
            {"url": " https://example.com/a ", "title": "A", "star_status": 1},
            {"url": "https://example.com/b", "title": "B", "created_at": 42}
        ]"#,
    )
    .unwrap();

    assert_eq!(articles[0].url, "https://example.com/a");
    assert_eq!(articles[0].star_status, StarStatus::Starred);
    assert!(articles[0].created_at > 0);
    assert_eq!(articles[1].created_at, 42);

    assert!(matches!(
        parse_import(r#"[{"url": "", "title": "x"}]"#),
        Err(CliError::EmptyUrl)
    ));
    assert!(matches!(
        parse_import("{}"),
        Err(CliError::Serialization(_))
    ));
}

#[test]
fn show_item_uses_reader_transformations() {
    let mut article = Article::new("https://example.com/a", "A");
    article.content = Some(r#"<a href="/x">x</a><img src="https://cdn/x/hero.png">"#.to_string());
    article.image = Some("https://cdn/x/hero.png".to_string());

    let item = article_to_show_item(&article);
    assert!(item.content.contains(r#"target="_blank""#));
    assert_eq!(item.banner, None);
}

#[tokio::test(flavor = "current_thread")]
async fn add_list_and_star_round_trip() {
    let (_dir, db_path) = temp_db();

    run_add(
        AddArgs {
            url: "https://example.com/one".to_string(),
            title: "One".to_string(),
            ..AddArgs::default()
        },
        &db_path,
    )
    .await
    .unwrap();

    run_star("https://example.com/one", StarStatus::Starred, &db_path)
        .await
        .unwrap();

    let starred = list_articles(10, true, &db_path).await.unwrap();
    assert_eq!(starred.len(), 1);
    assert!(starred[0].is_starred());

    run_star("https://example.com/one", StarStatus::Unstarred, &db_path)
        .await
        .unwrap();
    assert!(list_articles(10, true, &db_path).await.unwrap().is_empty());
    assert_eq!(list_articles(10, false, &db_path).await.unwrap().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn star_unknown_article_is_not_found() {
    let (_dir, db_path) = temp_db();

    let result = run_star("https://example.com/missing", StarStatus::Starred, &db_path).await;
    assert!(matches!(result, Err(CliError::ArticleNotFound(url)) if url == "https://example.com/missing"));
}

#[tokio::test(flavor = "current_thread")]
async fn import_keeps_existing_star_status() {
    let (dir, db_path) = temp_db();
    let import_path = dir.path().join("articles.json");
    std::fs::write(
        &import_path,
        r#"[{"url": "https://example.com/a", "title": "A"}]"#,
    )
    .unwrap();

    run_import(&import_path, &db_path).await.unwrap();
    run_star("https://example.com/a", StarStatus::Starred, &db_path)
        .await
        .unwrap();
    run_import(&import_path, &db_path).await.unwrap();

    let db = DatabaseService::open_path(&db_path).unwrap();
    let article = find_article("https://example.com/a", &db).await.unwrap();
    assert!(article.is_starred());
}
