use brook_core::models::{MAX_CONTENT_WIDTH, MAX_FONT_SIZE, MIN_CONTENT_WIDTH, MIN_FONT_SIZE};
use dioxus::prelude::*;

use super::apply_settings;
use super::row::SettingRow;
use crate::state::AppState;

/// Font family options.
const FONT_FAMILIES: &[(&str, &str)] = &[
    ("system-ui", "System Default"),
    ("Georgia", "Georgia"),
    ("Charter", "Charter"),
    ("Iowan Old Style", "Iowan Old Style"),
    ("Literata", "Literata"),
    ("JetBrains Mono", "JetBrains Mono"),
];

pub(super) const PREVIEW_SAMPLE: &str = "The quick brown fox jumps over the lazy dog.";

/// Typography of the reading view
#[component]
pub(super) fn EditorSettings() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let current_settings = (state.settings)();
    let mut preview_text = use_signal(|| PREVIEW_SAMPLE.to_string());
    #[cfg(test)]
    tests::PREVIEW_TEXT.with(|slot| slot.set(Some(preview_text)));

    rsx! {
        div {
            class: "editor-settings",

            SettingRow {
                label: "Font Family",
                description: "Font used for article content",

                select {
                    style: "width: 170px;",
                    onchange: move |evt: FormEvent| {
                        let mut new_settings = (state.settings)();
                        new_settings.font_family = evt.value();
                        apply_settings(state, new_settings);
                    },
                    for (value, label) in FONT_FAMILIES {
                        option {
                            key: "{value}",
                            value: *value,
                            selected: current_settings.font_family == *value,
                            "{label}"
                        }
                    }
                }
            }

            SettingRow {
                label: "Font Size",
                description: format!("Size of article text ({MIN_FONT_SIZE}-{MAX_FONT_SIZE}px)"),

                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    input {
                        r#type: "range",
                        min: "{MIN_FONT_SIZE}",
                        max: "{MAX_FONT_SIZE}",
                        step: "1",
                        value: "{current_settings.font_size}",
                        style: "width: 100px;",
                        oninput: move |evt: FormEvent| {
                            if let Ok(size) = evt.value().parse() {
                                let mut new_settings = (state.settings)();
                                new_settings.set_font_size(size);
                                apply_settings(state, new_settings);
                            }
                        },
                    }
                    span {
                        class: "slider-value",
                        "{current_settings.font_size}px"
                    }
                }
            }

            SettingRow {
                label: "Content Width",
                description: "Maximum width of the reading column",

                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    input {
                        r#type: "range",
                        min: "{MIN_CONTENT_WIDTH}",
                        max: "{MAX_CONTENT_WIDTH}",
                        step: "20",
                        value: "{current_settings.content_width}",
                        style: "width: 100px;",
                        oninput: move |evt: FormEvent| {
                            if let Ok(width) = evt.value().parse() {
                                let mut new_settings = (state.settings)();
                                new_settings.set_content_width(width);
                                apply_settings(state, new_settings);
                            }
                        },
                    }
                    span {
                        class: "slider-value",
                        "{current_settings.content_width}px"
                    }
                }
            }

            // Sample text is local to this panel and resets when the tab changes
            div {
                class: "editor-preview",
                style: "padding: 12px 0;",
                textarea {
                    rows: "2",
                    style: "
                        width: 100%;
                        box-sizing: border-box;
                        background: {colors.bg_secondary};
                        color: {colors.text_primary};
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        padding: 6px;
                    ",
                    value: "{preview_text}",
                    oninput: move |evt: FormEvent| preview_text.set(evt.value()),
                }
                p {
                    style: "
                        font-family: {current_settings.font_family}, system-ui, sans-serif;
                        font-size: {current_settings.font_size}px;
                        line-height: 1.6;
                    ",
                    "{preview_text}"
                }
            }
        }
    }
}

#[cfg(test)]
pub(super) mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::state::use_app_state;

    thread_local! {
        pub(in crate::components::settings) static PREVIEW_TEXT: Cell<Option<Signal<String>>> =
            const { Cell::new(None) };
    }

    fn harness() -> Element {
        let mut state = use_app_state();
        use_hook(move || state.settings.write().font_family = "Georgia".to_string());
        rsx! { EditorSettings {} }
    }

    #[test]
    fn preview_uses_current_typography() {
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("font-family: Georgia"));
        assert!(html.contains("16px"));
        assert!(html.contains(PREVIEW_SAMPLE));
    }
}
