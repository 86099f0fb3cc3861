//! Selectable sidebar entry

use dioxus::prelude::*;

use crate::state::AppState;

/// Sidebar entry that renders highlighted while selected
#[component]
pub fn SidebarItem(highlighted: bool, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let (bg, text_color) = if highlighted {
        (colors.accent, colors.accent_text)
    } else {
        ("transparent", colors.text_primary)
    };

    rsx! {
        div {
            class: if highlighted { "sidebar-item highlighted" } else { "sidebar-item" },
            role: "tab",
            "aria-selected": "{highlighted}",
            style: "
                padding: 8px 10px;
                border-radius: 6px;
                cursor: pointer;
                margin-bottom: 4px;
                background: {bg};
                color: {text_color};
                transition: background 0.15s;
            ",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
