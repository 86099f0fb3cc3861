use brook_core::models::ThemeMode;
use dioxus::prelude::*;

use super::apply_settings;
use super::row::SettingRow;
use crate::state::AppState;

const THEME_OPTIONS: [(ThemeMode, &str); 3] = [
    (ThemeMode::System, "System"),
    (ThemeMode::Light, "Light"),
    (ThemeMode::Dark, "Dark"),
];

/// Appearance and reading behaviour
#[component]
pub(super) fn GeneralSettings() -> Element {
    let state = use_context::<AppState>();
    let current_settings = (state.settings)();

    rsx! {
        div {
            class: "general-settings",

            SettingRow {
                label: "Theme",
                description: "Choose your preferred color scheme",

                select {
                    style: "width: 150px;",
                    onchange: move |evt: FormEvent| {
                        let mut new_settings = (state.settings)();
                        new_settings.theme = ThemeMode::parse(&evt.value());
                        apply_settings(state, new_settings);
                    },
                    for (mode, label) in THEME_OPTIONS {
                        option {
                            key: "{mode.as_str()}",
                            value: mode.as_str(),
                            selected: current_settings.theme == mode,
                            "{label}"
                        }
                    }
                }
            }

            SettingRow {
                label: "Banner Images",
                description: "Show the article's hero image above its content",

                input {
                    r#type: "checkbox",
                    checked: current_settings.show_banners,
                    onchange: move |_| {
                        let mut new_settings = (state.settings)();
                        new_settings.show_banners = !new_settings.show_banners;
                        apply_settings(state, new_settings);
                    },
                }
            }
        }
    }
}
