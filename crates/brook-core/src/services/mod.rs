//! Services shared by Brook clients

mod database;

pub use database::DatabaseService;
