//! Shared utility functions used across multiple modules.

use chrono::{DateTime, NaiveDateTime};
use url::Url;

/// Favicon service used for article and feed icons.
const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";

/// Display format for publish timestamps.
const PUBLISHED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Check if a string starts with `http://` or `https://`.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Host part of an absolute URL.
///
/// IPv6 literals keep their brackets so the value can be embedded in another
/// URL as-is.
pub fn url_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(ToString::to_string)
}

/// Favicon URL for the site an article lives on.
///
/// Returns an empty string when the URL has no recognizable host.
pub fn favicon_url(url: &str) -> String {
    url_host(url).map_or_else(String::new, |host| {
        format!("{FAVICON_SERVICE}?domain={host}&sz=32")
    })
}

/// Human-readable publish time.
///
/// Accepts RFC 3339, RFC 2822 and `YYYY-MM-DD HH:MM:SS`. Empty input yields an
/// empty string; anything else unparseable is returned as-is.
pub fn format_published(published: &str) -> String {
    let value = published.trim();
    if value.is_empty() {
        return String::new();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format(PUBLISHED_FORMAT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return dt.format(PUBLISHED_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return dt.format(PUBLISHED_FORMAT).to_string();
    }

    value.to_string()
}

/// Current Unix timestamp in milliseconds.
pub fn unix_millis_now() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_option_rejects_empty() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
    }

    #[test]
    fn is_http_url_accepts_valid_schemes() {
        assert!(is_http_url("http://localhost"));
        assert!(is_http_url("https://example.com"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("example.com"));
    }

    #[test]
    fn url_host_strips_everything_but_the_host() {
        assert_eq!(
            url_host("https://blog.example.com/a/b?c=d").as_deref(),
            Some("blog.example.com")
        );
        assert_eq!(
            url_host("http://user:pw@example.com:8080/").as_deref(),
            Some("example.com")
        );
        assert_eq!(url_host("example.com/path"), None);
        assert_eq!(url_host("mailto:someone@example.com"), None);
        assert_eq!(url_host(""), None);
    }

    #[test]
    fn url_host_keeps_ipv6_literals_whole() {
        assert_eq!(url_host("http://[::1]:8080/feed").as_deref(), Some("[::1]"));
        assert_eq!(
            url_host("http://[2001:db8::1]/post").as_deref(),
            Some("[2001:db8::1]")
        );
    }

    #[test]
    fn favicon_url_uses_host() {
        assert_eq!(
            favicon_url("https://example.com/post/1"),
            "https://www.google.com/s2/favicons?domain=example.com&sz=32"
        );
        assert_eq!(
            favicon_url("http://[::1]:8080/feed"),
            "https://www.google.com/s2/favicons?domain=[::1]&sz=32"
        );
        assert_eq!(favicon_url(""), "");
    }

    #[test]
    fn format_published_handles_feed_formats() {
        assert_eq!(format_published("2024-03-01T08:30:00Z"), "2024-03-01 08:30");
        assert_eq!(
            format_published("Fri, 01 Mar 2024 08:30:00 +0000"),
            "2024-03-01 08:30"
        );
        assert_eq!(format_published("2024-03-01 08:30:59"), "2024-03-01 08:30");
    }

    #[test]
    fn format_published_empty_and_garbage() {
        assert_eq!(format_published(""), "");
        assert_eq!(format_published("  "), "");
        assert_eq!(format_published("last tuesday"), "last tuesday");
    }
}
