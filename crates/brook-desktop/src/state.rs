//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use brook_core::models::{Article, Settings, StarStatus, ThemeMode};
use brook_core::services::DatabaseService;
use dioxus::prelude::*;

use crate::theme::{resolve_theme, ResolvedTheme};

/// Which articles the list shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArticleFilter {
    #[default]
    All,
    Starred,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// All articles loaded from the store
    pub articles: Signal<Vec<Article>>,
    /// URL of the article open in the reader
    pub selected_url: Signal<Option<String>>,
    /// List filter
    pub filter: Signal<ArticleFilter>,
    /// Application settings
    pub settings: Signal<Settings>,
    /// Resolved theme (light/dark based on settings and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Article store, once opened
    pub db_service: Signal<Option<DatabaseService>>,
    /// Startup error for UI display
    pub load_error: Signal<Option<String>>,
    /// Whether the settings panel is open
    pub settings_open: Signal<bool>,
}

impl AppState {
    /// Get the article open in the reader
    #[must_use]
    pub fn current_article(&self) -> Option<Article> {
        let selected = (self.selected_url)()?;
        self.articles
            .read()
            .iter()
            .find(|article| article.url == selected)
            .cloned()
    }

    /// Articles matching the active filter
    #[must_use]
    pub fn visible_articles(&self) -> Vec<Article> {
        filter_articles(&self.articles.read(), (self.filter)())
    }

    /// Reflect a persisted star change in the loaded articles
    pub fn apply_star_status(&mut self, url: &str, status: StarStatus) {
        let mut articles = self.articles.write();
        if let Some(article) = articles.iter_mut().find(|article| article.url == url) {
            article.star_status = status;
        }
    }
}

/// Create the application state signals and provide them as context
pub fn use_app_state() -> AppState {
    let articles = use_signal(Vec::new);
    let selected_url = use_signal(|| None);
    let filter = use_signal(ArticleFilter::default);
    let settings = use_signal(Settings::default);
    let theme = use_signal(|| resolve_theme(ThemeMode::System));
    let db_service = use_signal(|| None);
    let load_error = use_signal(|| None);
    let settings_open = use_signal(|| false);

    use_context_provider(|| AppState {
        articles,
        selected_url,
        filter,
        settings,
        theme,
        db_service,
        load_error,
        settings_open,
    })
}

/// Articles matching `filter`, in their original order
pub fn filter_articles(articles: &[Article], filter: ArticleFilter) -> Vec<Article> {
    articles
        .iter()
        .filter(|article| match filter {
            ArticleFilter::All => true,
            ArticleFilter::Starred => article.is_starred(),
        })
        .cloned()
        .collect()
}
