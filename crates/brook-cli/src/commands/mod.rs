pub mod add;
pub mod common;
pub mod import;
pub mod list;
pub mod show;
pub mod star;
