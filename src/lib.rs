pub mod config;
pub mod models;
pub mod observability;
pub mod services;

pub use self::config::{Config, ConfigError};
pub use self::models::{CatalogError, CatalogResult, Item, Restaurant};
pub use self::observability::init_observability;
pub use self::services::RestaurantService;
