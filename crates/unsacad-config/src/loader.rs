//! Configuration loader with layered sources.

use crate::app_config::{AppConfig, DEFAULT_JWT_SECRET};
use config::{Config, Environment, File};
use std::path::Path;
use tracing::{debug, info, warn};
use unsacad_kernel::{AppError, AppResult};

/// Loads configuration from the default location (`./config`).
pub fn load() -> AppResult<AppConfig> {
    load_from("./config")
}

/// Loads configuration from the given directory.
///
/// Sources are merged in order, later ones overriding earlier ones:
/// 1. `{dir}/default.toml`
/// 2. `{dir}/{environment}.toml` (environment from `UNSACAD_ENVIRONMENT`)
/// 3. `{dir}/local.toml` (uncommitted overrides)
/// 4. Environment variables with `UNSACAD_` prefix (`__` separator)
pub fn load_from(config_dir: &str) -> AppResult<AppConfig> {
    // Load .env file if present
    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file found or error loading it: {}", e);
    }

    let environment =
        std::env::var("UNSACAD_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    info!("Loading configuration for environment: {}", environment);

    let mut builder = Config::builder();

    for file in ["default", environment.as_str(), "local"] {
        let path = format!("{config_dir}/{file}.toml");
        if Path::new(&path).exists() {
            debug!("Loading config from: {}", path);
            builder = builder.add_source(File::with_name(&path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("UNSACAD")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| AppError::Configuration(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| AppError::Configuration(e.to_string()))?;

    validate(&app_config)?;

    Ok(app_config)
}

fn validate(config: &AppConfig) -> AppResult<()> {
    if config.database.url.is_empty() {
        return Err(AppError::Configuration(
            "Database URL is required".to_string(),
        ));
    }

    if config.security.jwt_secret == DEFAULT_JWT_SECRET {
        if config.app.is_production() {
            return Err(AppError::Configuration(
                "The default JWT secret must be replaced in production".to_string(),
            ));
        }
        warn!("Using the default JWT secret; set UNSACAD_SECURITY__JWT_SECRET");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_defaults_in_development() {
        let config = AppConfig::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_default_secret_in_production() {
        let mut config = AppConfig::default();
        config.app.environment = "production".to_string();
        let err = validate(&config).unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_validate_rejects_empty_database_url() {
        let mut config = AppConfig::default();
        config.database.url.clear();
        assert!(validate(&config).is_err());
    }
}
