//! Main application component

use brook_core::config::AppConfig;
use brook_core::models::Settings;
use brook_core::services::DatabaseService;
use dioxus::prelude::*;

use crate::components::SettingsPanel;
use crate::hotkey::{dispatch_hotkey, use_hotkey_provider};
use crate::state::use_app_state;
use crate::theme::resolve_theme;
use crate::views::Home;

/// Articles loaded into the list at startup
const ARTICLE_PAGE_SIZE: usize = 500;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let hotkeys = use_hotkey_provider();
    let mut state = use_app_state();
    let mut db_initialized = use_signal(|| false);

    // Open the article store asynchronously (only once)
    use_effect(move || {
        if db_initialized() {
            return;
        }
        db_initialized.set(true);

        let db_path = config.db_path().to_path_buf();
        spawn(async move {
            let db = match DatabaseService::open_path(&db_path) {
                Ok(db) => db,
                Err(e) => {
                    tracing::error!("Failed to open article store: {}", e);
                    state
                        .load_error
                        .set(Some(format!("Could not open {}: {e}", db_path.display())));
                    return;
                }
            };

            let loaded_settings = db.load_settings().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to load settings, using defaults: {}", e);
                Settings::default()
            });
            let loaded_articles = match db.list_articles(ARTICLE_PAGE_SIZE, 0).await {
                Ok(articles) => articles,
                Err(e) => {
                    tracing::error!("Failed to load articles: {}", e);
                    state.load_error.set(Some(format!("Could not load articles: {e}")));
                    Vec::new()
                }
            };
            tracing::info!("Loaded {} articles", loaded_articles.len());

            state.theme.set(resolve_theme(loaded_settings.theme));
            state.settings.set(loaded_settings);
            state.articles.set(loaded_articles);
            state.db_service.set(Some(db));
        });
    });

    let colors = (state.theme)().palette();
    let theme_attr = (state.theme)().as_attr();

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            tabindex: "0",
            autofocus: true,
            style: "
                min-height: 100vh;
                outline: none;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            onkeydown: move |evt: KeyboardEvent| {
                if dispatch_hotkey(&hotkeys, &evt) {
                    evt.prevent_default();
                }
            },

            Home {}

            if (state.settings_open)() {
                SettingsPanel {
                    on_close: move |()| state.settings_open.set(false),
                }
            }
        }
    }
}
