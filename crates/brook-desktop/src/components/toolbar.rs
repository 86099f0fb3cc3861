//! Toolbar component with list filters and actions

use dioxus::prelude::*;

use crate::state::{AppState, ArticleFilter};

/// Toolbar above the article list
#[component]
pub fn Toolbar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "toolbar",
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                padding: 10px 12px;
                border-bottom: 1px solid {colors.border};
                background: {colors.bg_secondary};
            ",

            FilterButton { label: "All", value: ArticleFilter::All }
            FilterButton { label: "Starred", value: ArticleFilter::Starred }

            // Spacer
            div { style: "flex: 1;" }

            button {
                class: "settings-button",
                title: "Settings",
                style: "
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    padding: 4px 10px;
                    cursor: pointer;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                ",
                onclick: move |_| state.settings_open.set(true),
                "Settings"
            }
        }
    }
}

#[component]
fn FilterButton(label: &'static str, value: ArticleFilter) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let active = (state.filter)() == value;

    let (bg, fg) = if active {
        (colors.accent, colors.accent_text)
    } else {
        (colors.bg_tertiary, colors.text_primary)
    };

    rsx! {
        button {
            class: "filter-button",
            "aria-pressed": "{active}",
            style: "
                border: none;
                border-radius: 6px;
                padding: 4px 10px;
                cursor: pointer;
                background: {bg};
                color: {fg};
            ",
            onclick: move |_| state.filter.set(value),
            "{label}"
        }
    }
}
