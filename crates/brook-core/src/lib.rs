//! brook-core - Core library for Brook
//!
//! This crate contains the shared models, content transformation, star-state
//! logic, and local article store used by the Brook desktop app and CLI.

pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod star;
pub mod util;

pub use content::ArticleDisplay;
pub use error::{Error, Result};
pub use models::{Article, StarStatus};
pub use star::{StarIndicator, StarRequest};
