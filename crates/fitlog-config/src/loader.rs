//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use fitlog_core::FitlogError;
use std::path::Path;
use tracing::{debug, info};

/// Variables honored on top of the `FITLOG__` namespace for hosts that
/// only hand out a bare port and database URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatOverrides {
    /// Value of `PORT`.
    pub port: Option<String>,
    /// Value of `DATABASE_URL`.
    pub database_url: Option<String>,
}

impl CompatOverrides {
    /// Reads the overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT").ok().filter(|v| !v.is_empty()),
            database_url: std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
        }
    }
}

/// Configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `FITLOG__` prefix
    /// 5. `PORT` and `DATABASE_URL`
    pub fn new(config_dir: &str) -> Result<Self, FitlogError> {
        Ok(Self {
            config: Self::load_config(config_dir)?,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, FitlogError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, FitlogError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("FITLOG_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        load_layered(config_dir, &environment, &CompatOverrides::from_env())
    }
}

/// Builds and validates the configuration for `environment` from
/// `config_dir`, applying `overrides` last.
pub fn load_layered(
    config_dir: &str,
    environment: &str,
    overrides: &CompatOverrides,
) -> Result<AppConfig, FitlogError> {
    info!("Loading configuration for environment: {}", environment);

    let mut builder = Config::builder()
        .set_override("app.environment", environment)
        .or_config_error()?;

    for layer in ["default", environment, "local"] {
        let path = format!("{config_dir}/{layer}.toml");
        if Path::new(&path).exists() {
            debug!("Loading config layer from: {}", path);
            builder = builder.add_source(File::with_name(&path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("FITLOG")
            .separator("__")
            .try_parsing(true),
    );

    if let Some(port) = &overrides.port {
        debug!("Applying PORT override: {}", port);
        builder = builder
            .set_override("server.port", port.as_str())
            .or_config_error()?;
    }
    if let Some(url) = &overrides.database_url {
        debug!("Applying DATABASE_URL override");
        builder = builder
            .set_override("database.url", url.as_str())
            .or_config_error()?;
    }

    let app_config: AppConfig = builder
        .build()
        .and_then(Config::try_deserialize)
        .or_config_error()?;

    ConfigValidator::validate(&app_config)
        .map_err(|errors| FitlogError::Configuration(format_validation_errors(&errors)))?;

    Ok(app_config)
}

trait ConfigResultExt<T> {
    fn or_config_error(self) -> Result<T, FitlogError>;
}

impl<T> ConfigResultExt<T> for Result<T, ConfigError> {
    fn or_config_error(self) -> Result<T, FitlogError> {
        self.map_err(|e| FitlogError::Configuration(e.to_string()))
    }
}
