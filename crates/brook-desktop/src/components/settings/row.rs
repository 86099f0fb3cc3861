use dioxus::prelude::*;

use crate::state::AppState;

/// Shared row layout for settings sections.
#[component]
pub(super) fn SettingRow(
    #[props(into)] label: String,
    #[props(into)] description: String,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "settings-row",
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 16px;
                padding: 12px 0;
                border-bottom: 1px solid {colors.border};
            ",

            div {
                class: "settings-row-info",
                div {
                    class: "settings-row-label",
                    style: "font-weight: 500;",
                    "{label}"
                }
                div {
                    class: "settings-row-description",
                    style: "font-size: 12px; color: {colors.text_secondary};",
                    "{description}"
                }
            }
            div {
                class: "settings-row-control",
                {children}
            }
        }
    }
}
