//! Home view - main application screen

use brook_core::StarStatus;
use dioxus::prelude::*;

use crate::components::{ArticleList, ArticleView, StarArticle, Toolbar};
use crate::state::AppState;

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let star_article =
        use_memo(move || state.db_service.read().clone().map(StarArticle::from_service));

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; height: 100vh;",

            div {
                class: "list-pane",
                style: "
                    width: 320px;
                    display: flex;
                    flex-direction: column;
                    border-right: 1px solid {colors.border};
                    background: {colors.bg_primary};
                ",

                Toolbar {}

                if let Some(error) = (state.load_error)() {
                    div {
                        class: "load-error",
                        role: "alert",
                        style: "padding: 10px 16px; font-size: 13px; color: {colors.error};",
                        "{error}"
                    }
                }

                ArticleList {}
            }

            if let Some(star_article) = star_article() {
                ArticleView {
                    article: state.current_article(),
                    star_article,
                    on_starred: move |(url, status): (String, StarStatus)| {
                        state.apply_star_status(&url, status);
                    },
                }
            } else {
                div {
                    style: "
                        flex: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: {colors.text_muted};
                    ",
                    if (state.load_error)().is_some() {
                        "Article store unavailable"
                    } else {
                        "Opening article store..."
                    }
                }
            }
        }
    }
}
