//! Optimistic star toggle for the article viewer
//!
//! The indicator flips as soon as the user toggles it; persistence runs in the
//! background. The status sent to the store is always derived from the
//! article's stored `star_status`, never from accumulated local clicks. When
//! a persistence call fails the indicator falls back to the stored status,
//! but only if nothing else (another toggle, a different article) happened in
//! the meantime.

use crate::models::{Article, StarStatus};

/// Local star display state for one mounted viewer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StarIndicator {
    url: Option<String>,
    stored: StarStatus,
    starred: bool,
    generation: u64,
}

/// A persistence call produced by [`StarIndicator::toggle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRequest {
    pub url: String,
    pub new_status: StarStatus,
    generation: u64,
}

impl StarIndicator {
    /// Indicator for the given article; `None` yields an inert indicator
    #[must_use]
    pub fn for_article(article: Option<&Article>) -> Self {
        let mut indicator = Self::default();
        indicator.reset(article);
        indicator
    }

    /// Re-derive from a (possibly different) article, discarding local flips
    pub fn reset(&mut self, article: Option<&Article>) {
        self.generation += 1;
        match article {
            Some(article) => {
                self.url = Some(article.url.clone());
                self.stored = article.star_status;
                self.starred = article.is_starred();
            }
            None => {
                self.url = None;
                self.stored = StarStatus::Unstarred;
                self.starred = false;
            }
        }
    }

    #[must_use]
    pub const fn is_starred(&self) -> bool {
        self.starred
    }

    /// Whether this indicator was derived from `article` as it is now
    ///
    /// `false` once the viewer shows a different article or the stored status
    /// of the same article changed.
    #[must_use]
    pub fn tracks(&self, article: &Article) -> bool {
        self.url() == Some(article.url.as_str()) && self.stored == article.star_status
    }

    /// Reset unless already derived from `article`
    pub fn sync(&mut self, article: &Article) {
        if !self.tracks(article) {
            self.reset(Some(article));
        }
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Flip the display and return the persistence call to dispatch
    ///
    /// Returns `None` when no article is loaded.
    pub fn toggle(&mut self) -> Option<StarRequest> {
        let url = self.url.clone()?;
        self.generation += 1;
        self.starred = !self.starred;
        Some(StarRequest {
            url,
            new_status: self.stored.flipped(),
            generation: self.generation,
        })
    }

    /// Record a failed persistence call
    ///
    /// Restores the stored status and returns `true` if `request` is still the
    /// latest change to this indicator. Stale failures are ignored.
    pub fn persist_failed(&mut self, request: &StarRequest) -> bool {
        if request.generation != self.generation || self.url() != Some(request.url.as_str()) {
            return false;
        }
        self.starred = self.stored.is_starred();
        true
    }
}
