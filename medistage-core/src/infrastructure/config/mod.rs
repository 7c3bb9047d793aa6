// medistage-core/src/infrastructure/config/mod.rs

pub mod catalog;
pub mod settings;

pub use catalog::{CATALOG_FILE, load_catalog, load_catalog_file};
pub use settings::{AppSettings, load_settings};
