//! Settings panel component

mod editor;
mod general;
mod row;

use brook_core::models::{Settings, SettingsTab};
use dioxus::prelude::*;

use self::editor::EditorSettings;
use self::general::GeneralSettings;
use super::SidebarItem;
use crate::hotkey::{escape_hotkey, use_hotkeys, Hotkey};
use crate::state::AppState;
use crate::theme::resolve_theme;

/// Modal settings dialog with a tab sidebar
///
/// Escape, the close button and clicks on the backdrop all request dismissal
/// through `on_close`; the panel never closes itself.
#[component]
pub fn SettingsPanel(on_close: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut active_tab = use_signal(SettingsTab::default);
    #[cfg(test)]
    tests::ACTIVE_TAB.with(|slot| slot.set(Some(active_tab)));

    use_hotkeys(vec![Hotkey::new(escape_hotkey(), on_close)]);

    rsx! {
        div {
            class: "settings-backdrop",
            style: "
                position: fixed;
                inset: 0;
                background: {colors.backdrop};
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 100;
            ",
            onclick: move |_| on_close.call(()),

            div {
                class: "settings-dialog",
                role: "dialog",
                "aria-modal": "true",
                style: "
                    display: flex;
                    width: 640px;
                    max-width: 90vw;
                    height: 440px;
                    max-height: 90vh;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    border: 1px solid {colors.border};
                    border-radius: 10px;
                    overflow: hidden;
                ",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                nav {
                    class: "settings-sidebar",
                    role: "tablist",
                    style: "
                        width: 160px;
                        padding: 16px 10px;
                        background: {colors.bg_secondary};
                        border-right: 1px solid {colors.border};
                    ",
                    for tab in SettingsTab::ALL {
                        SidebarItem {
                            key: "{tab.label()}",
                            highlighted: active_tab() == tab,
                            onclick: move |_| active_tab.set(tab),
                            "{tab.label()}"
                        }
                    }
                }

                div {
                    class: "settings-main",
                    style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",

                    div {
                        style: "
                            display: flex;
                            justify-content: space-between;
                            align-items: center;
                            padding: 14px 20px;
                            border-bottom: 1px solid {colors.border};
                        ",
                        h2 {
                            style: "margin: 0; font-size: 16px; font-weight: 600;",
                            "{active_tab().label()}"
                        }
                        button {
                            class: "settings-close",
                            title: "Close (Esc)",
                            style: "
                                background: none;
                                border: none;
                                cursor: pointer;
                                font-size: 18px;
                                color: {colors.text_secondary};
                            ",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }

                    div {
                        class: "settings-content",
                        style: "flex: 1; overflow-y: auto; padding: 8px 20px;",
                        TabPanel { tab: active_tab() }
                    }
                }
            }
        }
    }
}

/// Mounts the panel for `tab` and nothing else
#[component]
fn TabPanel(tab: SettingsTab) -> Element {
    match tab {
        SettingsTab::General => rsx! { GeneralSettings {} },
        SettingsTab::Editor => rsx! { EditorSettings {} },
    }
}

/// Apply settings immediately and persist them in the background
///
/// The save runs in the root scope so closing the panel cannot cancel it.
fn apply_settings(state: AppState, new_settings: Settings) {
    let mut settings = state.settings;
    let mut theme = state.theme;
    theme.set(resolve_theme(new_settings.theme));
    settings.set(new_settings.clone());

    let db = state.db_service.read().clone();
    spawn_forever(async move {
        if let Some(db) = db {
            if let Err(e) = db.save_settings(&new_settings).await {
                tracing::error!("Failed to save settings: {}", e);
            }
        }
    });
}
