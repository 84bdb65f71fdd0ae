// Runtime configuration loaded from the environment

pub mod app;
pub mod database;

pub use app::AppConfig;
pub use database::DatabaseConfig;
