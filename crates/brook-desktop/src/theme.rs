//! Theme configuration for the desktop app

use std::sync::OnceLock;

use brook_core::models::ThemeMode;

/// System dark mode preference, probed once per process
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Value for the root `data-theme` attribute
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System if is_system_dark_mode() => ResolvedTheme::Dark,
        ThemeMode::System => ResolvedTheme::Light,
    }
}

/// Detect system dark mode preference (cached after first call)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(|| {
        let is_dark = detect_system_dark_mode();
        tracing::debug!(
            "System theme detected: {}",
            if is_dark { "dark" } else { "light" }
        );
        is_dark
    })
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            String::from_utf8_lossy(&output.stdout)
                .trim()
                .eq_ignore_ascii_case("dark")
        })
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to detect system theme: {}", e);
            false
        })
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode() -> bool {
    // AppsUseLightTheme = 0x0 means dark mode
    std::process::Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output()
        .map(|output| String::from_utf8_lossy(&output.stdout).contains("0x0"))
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to detect system theme: {}", e);
            false
        })
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME").is_ok_and(|theme| theme.to_lowercase().contains("dark"))
}

/// Color palette for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub backdrop: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub star: &'static str,
    pub error: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#fdfcfa",
    bg_secondary: "#f4f2ee",
    bg_tertiary: "#ebe8e2",
    backdrop: "rgba(20, 20, 20, 0.45)",
    text_primary: "#1f1d1a",
    text_secondary: "#5c5850",
    text_muted: "#9a958b",
    border: "#dcd8cf",
    accent: "#2f6f6a",
    accent_text: "#ffffff",
    star: "#d49a1a",
    error: "#c0392b",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#17191b",
    bg_secondary: "#1f2224",
    bg_tertiary: "#292c2f",
    backdrop: "rgba(0, 0, 0, 0.6)",
    text_primary: "#e6e4df",
    text_secondary: "#a8a49b",
    text_muted: "#6d6a63",
    border: "#34383b",
    accent: "#6fb8b0",
    accent_text: "#101213",
    star: "#f2c14e",
    error: "#f07b6b",
};
