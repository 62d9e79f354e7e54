use chrono::NaiveTime;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{
    validate_location, validate_restaurant_name, Item, Validate, ValidationError,
    ValidationResult,
};
use crate::services::RestaurantService;

/// Environment variable naming an optional configuration file
pub const CONFIG_FILE_ENV: &str = "RESTAURANT_CONFIG_FILE";

/// Prefix for environment overrides, e.g. `RESTAURANT__OBSERVABILITY__LOG_LEVEL`
pub const ENV_PREFIX: &str = "RESTAURANT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading error: {message}")]
    LoadError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        ConfigError::ValidationError {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub enable_json_logging: bool,
}

/// Restaurants to register at startup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub restaurants: Vec<RestaurantSeed>,
}

/// A restaurant as described in configuration; times use `HH:MM:SS`
#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantSeed {
    pub name: String,
    pub location: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    #[serde(default)]
    pub menu: Vec<Item>,
}

impl Config {
    /// Load from the file named by `RESTAURANT_CONFIG_FILE` (if set), then
    /// apply `RESTAURANT__*` environment overrides.
    pub fn from_environment() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment");

        let mut builder = config::Config::builder();
        if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
            info!(path = %path, "Using configuration file");
            builder = builder.add_source(File::from(Path::new(&path)));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        Self::from_builder(builder)
    }

    /// Load from a single configuration file; the format follows the extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading configuration from file");
        Self::from_builder(config::Config::builder().add_source(File::from(path)))
    }

    /// Load from an in-memory document
    pub fn from_contents(contents: &str, format: FileFormat) -> Result<Self, ConfigError> {
        Self::from_builder(config::Config::builder().add_source(File::from_str(contents, format)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings = builder.build().map_err(|e| ConfigError::LoadError {
            message: format!("Failed to load config: {}", e),
        })?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ConfigError::LoadError {
                message: format!("Failed to deserialize config: {}", e),
            })?;

        config.validate()?;

        info!(
            restaurants = config.catalog.restaurants.len(),
            "Configuration loaded successfully"
        );
        debug!("Configuration: {:?}", config);

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.observability.service_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Service name cannot be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for seed in &self.catalog.restaurants {
            seed.validate()?;

            if !seen.insert(seed.name.as_str()) {
                warn!(restaurant = %seed.name, "Duplicate restaurant name in catalog");
            }
            if seed.opening_time == seed.closing_time {
                warn!(restaurant = %seed.name, "Opening and closing time are equal; restaurant never opens");
            }
        }

        Ok(())
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            enable_json_logging: false,
        }
    }
}

impl Validate for RestaurantSeed {
    fn validate(&self) -> ValidationResult<()> {
        validate_restaurant_name(&self.name)?;
        validate_location(&self.location)?;
        for item in &self.menu {
            item.validate()?;
        }
        Ok(())
    }
}

impl CatalogConfig {
    /// Build a catalog holding every seeded restaurant in configuration order
    pub fn build_service(&self) -> RestaurantService {
        let mut service = RestaurantService::new();
        for seed in &self.restaurants {
            let restaurant = service.add_restaurant(
                seed.name.clone(),
                seed.location.clone(),
                seed.opening_time,
                seed.closing_time,
            );
            for item in &seed.menu {
                restaurant.add_to_menu(item.name(), item.price());
            }
        }
        service
    }
}

// Default value functions
pub(crate) fn default_service_name() -> String {
    "restaurant-finder".to_string()
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}
