pub mod app_config;
pub mod config;
pub mod error;
pub mod hotel;
pub mod suppliers;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use hotel::{Amenities, Hotel, Image, Images, Location};
pub use suppliers::{load_suppliers, SupplierConfig, SuppliersFile};
