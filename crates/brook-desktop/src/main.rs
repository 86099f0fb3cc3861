//! Brook Desktop Application
//!
//! A quiet desktop feed reader.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod hotkey;
mod state;
mod theme;
mod views;

use brook_core::config::AppConfig;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_logging(&config);

    tracing::info!("Starting Brook...");
    if let Err(e) = config.ensure_data_dir() {
        tracing::error!("Failed to create data directory: {}", e);
    }

    let window = WindowBuilder::new()
        .with_title("Brook")
        .with_inner_size(LogicalSize::new(1100.0, 760.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(app::App);
}

fn init_logging(config: &AppConfig) {
    let mut filter = EnvFilter::from_default_env();
    for directive in ["brook_desktop=debug", "brook_core=debug"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    if let Some(extra) = &config.log_filter {
        for directive in extra.split(',').filter_map(|d| d.trim().parse().ok()) {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
