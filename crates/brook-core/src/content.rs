//! Article content preparation for display
//!
//! Two string heuristics run over feed markup before it is injected into the
//! reader view:
//!
//! - every anchor without a `target` attribute is rewritten to open in a new
//!   browsing context;
//! - the hero banner is suppressed when the image's file name already appears
//!   in the body.
//!
//! Neither step parses HTML. Attribute values containing `>` or anchors split
//! across unusual whitespace can be missed, and the banner check can be fooled
//! by URL-encoded or query-decorated repeats. Markup is otherwise passed
//! through untouched; this is not a sanitizer.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::Article;

/// Attributes added to anchors that do not declare a target
pub const NEW_TAB_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// `<a>` or `<a ...>` opening tags; `<abbr>`, `<area>` and closing tags are skipped
static ANCHOR_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<a(\s[^>]*)?>").expect("Invalid anchor regex"));

static TARGET_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\btarget\s*=").expect("Invalid target regex"));

static REL_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\brel\s*=").expect("Invalid rel regex"));

/// Display-ready state derived from one article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDisplay {
    /// Body markup with anchors forced to open in a new tab
    pub content: String,
    /// Banner image to render above the body, if any
    pub banner: Option<String>,
}

impl ArticleDisplay {
    /// Derive display content and banner visibility for an article
    #[must_use]
    pub fn from_article(article: &Article) -> Self {
        let content = open_links_in_new_tab(article.body());
        let image = article
            .image
            .as_deref()
            .map(str::trim)
            .filter(|image| !image.is_empty());

        let banner = image
            .filter(|image| banner_visible(Some(image), &content))
            .map(ToString::to_string);

        Self { content, banner }
    }
}

/// Add `target="_blank"` to every anchor that does not already declare a target
///
/// Detection is a case-insensitive `target=` substring check inside each
/// opening tag. `rel="noopener noreferrer"` is added alongside unless the
/// anchor already carries a `rel` attribute.
///
/// # Examples
///
/// ```
/// use brook_core::content::open_links_in_new_tab;
///
/// let html = open_links_in_new_tab(r#"<a href="x">x</a>"#);
/// assert!(html.contains(r#"target="_blank""#));
///
/// let kept = r#"<a href="x" target="_self">x</a>"#;
/// assert_eq!(open_links_in_new_tab(kept), kept);
/// ```
#[must_use]
pub fn open_links_in_new_tab(html: &str) -> String {
    ANCHOR_OPEN
        .replace_all(html, |caps: &Captures<'_>| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            if TARGET_ATTR.is_match(attrs) {
                return caps[0].to_string();
            }

            // Keep the original `<a` casing
            let open = &caps[0][..2];
            if REL_ATTR.is_match(attrs) {
                format!(r#"{open} target="_blank"{attrs}>"#)
            } else {
                format!("{open} {NEW_TAB_ATTRS}{attrs}>")
            }
        })
        .into_owned()
}

/// Text after the final `/` of a URL (the whole string when there is none)
#[must_use]
pub fn trailing_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Whether a banner image should be shown above `content`
///
/// False without an image. Otherwise true unless the image's trailing path
/// segment already appears somewhere in the (transformed) content.
#[must_use]
pub fn banner_visible(image: Option<&str>, content: &str) -> bool {
    image.is_some_and(|image| !content.contains(trailing_segment(image)))
}
