pub mod app_config;
pub mod catalog;
pub mod file_loader;

pub use app_config::{ApiKey, Config};
pub use catalog::{CatalogState, DataSource, LoadReport, SourceReport};
pub use file_loader::{load_data, load_grouped_data, GroupedRecords, LoadStatus, VENDOR_KEY};
