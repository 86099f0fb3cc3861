//! Reader pane for a single article

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use brook_core::models::{Article, StarStatus};
use brook_core::services::DatabaseService;
use brook_core::util::{favicon_url, format_published};
use brook_core::{ArticleDisplay, StarIndicator};
use dioxus::prelude::*;

use crate::state::AppState;

type StarFuture = Pin<Box<dyn Future<Output = brook_core::Result<()>>>>;

/// Persists a new star status for the article at `url`
#[derive(Clone)]
pub struct StarArticle(Rc<dyn Fn(String, StarStatus) -> StarFuture>);

impl StarArticle {
    pub fn new<F, Fut>(star: F) -> Self
    where
        F: Fn(String, StarStatus) -> Fut + 'static,
        Fut: Future<Output = brook_core::Result<()>> + 'static,
    {
        Self(Rc::new(move |url, status| Box::pin(star(url, status))))
    }

    /// Persist through the shared article store
    pub fn from_service(service: DatabaseService) -> Self {
        Self::new(move |url, status| {
            let service = service.clone();
            async move { service.star_article(&url, status).await }
        })
    }

    pub fn call(&self, url: String, status: StarStatus) -> StarFuture {
        (self.0)(url, status)
    }
}

impl PartialEq for StarArticle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Article reader with an optimistic star toggle
///
/// `on_starred` fires after a status change was persisted so the owner can
/// update its copy of the article; the indicator then re-derives from it.
/// Local star state is keyed by article, so the first render after a switch
/// already shows the new article's status.
#[component]
pub fn ArticleView(
    article: ReadOnlySignal<Option<Article>>,
    star_article: StarArticle,
    on_starred: EventHandler<(String, StarStatus)>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let settings = (state.settings)();

    let display = use_memo(move || article.read().as_ref().map(ArticleDisplay::from_article));
    let mut indicator = use_signal(|| StarIndicator::for_article(article.read().as_ref()));
    // (article url, message) of the last failed save
    let mut star_error = use_signal(|| None::<(String, String)>);

    let toggle_star = move |_: MouseEvent| {
        let request = {
            let mut indicator = indicator.write();
            match article.peek().as_ref() {
                Some(current) => indicator.sync(current),
                None => indicator.reset(None),
            }
            indicator.toggle()
        };
        let Some(request) = request else {
            return;
        };
        star_error.set(None);

        let star_article = star_article.clone();
        spawn(async move {
            match star_article.call(request.url.clone(), request.new_status).await {
                Ok(()) => {
                    tracing::debug!("Star status of {} set to {}", request.url, request.new_status);
                    on_starred.call((request.url.clone(), request.new_status));
                }
                Err(e) => {
                    tracing::error!("Failed to update star status of {}: {}", request.url, e);
                    if indicator.write().persist_failed(&request) {
                        star_error.set(Some((
                            request.url.clone(),
                            format!("Couldn't save star: {e}"),
                        )));
                    }
                }
            }
        });
    };

    let (Some(current), Some(display)) = (article(), display()) else {
        return rsx! {
            div {
                class: "article-empty",
                style: "
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: {colors.text_muted};
                ",
                "Select an article to start reading"
            }
        };
    };

    let starred = {
        let indicator = indicator.read();
        if indicator.tracks(&current) {
            indicator.is_starred()
        } else {
            current.is_starred()
        }
    };
    let star_message = star_error()
        .filter(|(url, _)| *url == current.url)
        .map(|(_, message)| message);
    let favicon = favicon_url(&current.url);
    let published = format_published(&current.published);
    let (star_label, star_color) = if starred {
        ("★ Starred", colors.star)
    } else {
        ("☆ Star", colors.text_secondary)
    };

    rsx! {
        article {
            class: "article-view",
            style: "flex: 1; overflow-y: auto; padding: 24px 32px;",

            div {
                style: "max-width: {settings.content_width}px; margin: 0 auto;",

                header {
                    class: "article-header",
                    style: "margin-bottom: 20px;",

                    div {
                        style: "
                            display: flex;
                            align-items: center;
                            gap: 8px;
                            font-size: 13px;
                            color: {colors.text_secondary};
                        ",
                        if !favicon.is_empty() {
                            img {
                                class: "article-favicon",
                                src: "{favicon}",
                                width: "16",
                                height: "16",
                                alt: "",
                            }
                        }
                        if !current.feed_title.is_empty() {
                            span { "{current.feed_title}" }
                        }
                        if !published.is_empty() {
                            time { "{published}" }
                        }
                        if !current.author.is_empty() {
                            span { "by {current.author}" }
                        }
                    }

                    h1 {
                        class: "article-title",
                        style: "margin: 8px 0; font-size: 26px; line-height: 1.25;",
                        "{current.display_title()}"
                    }

                    div {
                        style: "display: flex; align-items: center; gap: 12px;",
                        button {
                            class: "star-toggle",
                            "aria-pressed": "{starred}",
                            style: "
                                background: none;
                                border: 1px solid {colors.border};
                                border-radius: 6px;
                                padding: 4px 10px;
                                cursor: pointer;
                                color: {star_color};
                            ",
                            onclick: toggle_star,
                            "{star_label}"
                        }
                        a {
                            class: "article-original",
                            href: "{current.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            style: "color: {colors.accent}; font-size: 13px;",
                            "Open original"
                        }
                    }

                    if let Some(message) = star_message {
                        div {
                            class: "star-error",
                            role: "alert",
                            style: "margin-top: 8px; font-size: 13px; color: {colors.error};",
                            "{message}"
                        }
                    }
                }

                if settings.show_banners {
                    if let Some(banner) = &display.banner {
                        img {
                            class: "article-banner",
                            src: "{banner}",
                            alt: "",
                            style: "width: 100%; border-radius: 8px; margin-bottom: 20px;",
                        }
                    }
                }

                div {
                    class: "article-content",
                    style: "
                        font-family: {settings.font_family}, system-ui, sans-serif;
                        font-size: {settings.font_size}px;
                        line-height: 1.7;
                    ",
                    dangerous_inner_html: "{display.content}",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::state::use_app_state;

    thread_local! {
        static SHOWN: Cell<Option<Signal<Option<Article>>>> = const { Cell::new(None) };
    }

    fn switching_harness() -> Element {
        use_app_state();
        let shown = use_signal(|| {
            let mut first = Article::new("https://a.example.com/1", "First");
            first.star_status = StarStatus::Starred;
            Some(first)
        });
        SHOWN.with(|slot| slot.set(Some(shown)));

        rsx! {
            ArticleView {
                article: shown,
                star_article: StarArticle::new(|_, _| async { Ok(()) }),
                on_starred: |_| {},
            }
        }
    }

    fn harness(article: Option<Article>) -> Element {
        use_app_state();
        rsx! {
            ArticleView {
                article,
                star_article: StarArticle::new(|_, _| async { Ok(()) }),
                on_starred: |_| {},
            }
        }
    }

    fn render(article: Option<Article>) -> String {
        let mut dom = VirtualDom::new_with_props(harness, article);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn article(star_status: StarStatus) -> Article {
        let mut article = Article::new("https://blog.example.com/posts/1", "Hello Brook");
        article.star_status = star_status;
        article.content = Some(r#"<p>See <a href="https://example.org">this</a></p>"#.to_string());
        article
    }

    #[test]
    fn no_article_renders_placeholder_only() {
        let html = render(None);
        assert!(html.contains("article-empty"));
        assert!(!html.contains("article-title"));
        assert!(!html.contains("star-toggle"));
    }

    #[test]
    fn star_status_drives_indicator() {
        let html = render(Some(article(StarStatus::Starred)));
        assert!(html.contains("aria-pressed=\"true\""));
        assert!(html.contains("★ Starred"));

        let html = render(Some(article(StarStatus::Unstarred)));
        assert!(html.contains("aria-pressed=\"false\""));
        assert!(html.contains("☆ Star"));
    }

    #[test]
    fn switching_article_updates_star_on_next_render() {
        let mut dom = VirtualDom::new(switching_harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("First"));
        assert!(html.contains("aria-pressed=\"true\""));

        let mut shown = SHOWN.with(Cell::get).unwrap();
        dom.in_runtime(|| shown.set(Some(Article::new("https://b.example.com/2", "Second"))));
        dom.process_events();
        let _ = dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Second"));
        assert!(html.contains("aria-pressed=\"false\""));
        assert!(html.contains("☆ Star"));
        assert!(!html.contains("★ Starred"));
    }

    #[test]
    fn content_links_open_in_new_tab() {
        let html = render(Some(article(StarStatus::Unstarred)));
        assert!(html.contains(r#"<a target="_blank" rel="noopener noreferrer" href="https://example.org">"#));
        assert!(html.contains("Hello Brook"));
    }

    #[test]
    fn banner_hidden_when_image_is_in_content() {
        let mut with_banner = article(StarStatus::Unstarred);
        with_banner.image = Some("https://cdn.example.com/x/banner123.png".to_string());
        assert!(render(Some(with_banner.clone())).contains("article-banner"));

        with_banner.content = Some(r#"<img src="https://cdn.example.com/x/banner123.png">"#.to_string());
        assert!(!render(Some(with_banner)).contains("article-banner"));
    }
}
