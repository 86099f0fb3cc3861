//! UI Components
//!
//! Reusable UI components for the desktop application.

mod article_list;
mod article_view;
mod settings;
mod sidebar_item;
mod toolbar;

pub use article_list::ArticleList;
pub use article_view::{ArticleView, StarArticle};
pub use settings::SettingsPanel;
pub use sidebar_item::SidebarItem;
pub use toolbar::Toolbar;
