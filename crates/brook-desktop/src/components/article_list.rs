//! Article list component

use brook_core::util::format_published;
use dioxus::prelude::*;

use crate::state::{AppState, ArticleFilter};

/// List of articles, newest first
#[component]
pub fn ArticleList() -> Element {
    let mut state = use_context::<AppState>();
    let articles = state.visible_articles();
    let selected_url = (state.selected_url)();
    let colors = (state.theme)().palette();

    let empty_message = match (state.filter)() {
        ArticleFilter::All => "No articles yet",
        ArticleFilter::Starred => "No starred articles",
    };

    rsx! {
        div {
            class: "article-list",
            style: "flex: 1; overflow-y: auto;",

            if articles.is_empty() {
                div {
                    style: "
                        padding: 20px;
                        text-align: center;
                        color: {colors.text_muted};
                    ",
                    "{empty_message}"
                }
            } else {
                for article in articles {
                    {
                        let is_selected = selected_url.as_deref() == Some(article.url.as_str());
                        let url = article.url.clone();
                        let published = format_published(&article.published);
                        let bg = if is_selected { colors.bg_tertiary } else { colors.bg_primary };
                        let border_left = if is_selected {
                            format!("3px solid {}", colors.accent)
                        } else {
                            "3px solid transparent".to_string()
                        };

                        rsx! {
                            div {
                                key: "{article.url}",
                                class: if is_selected { "article-item selected" } else { "article-item" },
                                style: "
                                    padding: 12px 16px;
                                    border-bottom: 1px solid {colors.border};
                                    border-left: {border_left};
                                    cursor: pointer;
                                    background: {bg};
                                ",
                                onclick: move |_| state.selected_url.set(Some(url.clone())),

                                div {
                                    style: "
                                        display: flex;
                                        justify-content: space-between;
                                        gap: 8px;
                                        font-weight: 500;
                                        color: {colors.text_primary};
                                    ",
                                    span {
                                        style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                        "{article.display_title()}"
                                    }
                                    if article.is_starred() {
                                        span { style: "color: {colors.star};", "★" }
                                    }
                                }

                                div {
                                    style: "font-size: 12px; color: {colors.text_secondary}; margin-top: 4px;",
                                    "{article.feed_title}"
                                    if !published.is_empty() {
                                        " · {published}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
