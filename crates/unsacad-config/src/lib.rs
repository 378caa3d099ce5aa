//! # Unsacad Config
//!
//! Layered configuration for the Unsacad backend: defaults, TOML files,
//! and `UNSACAD_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::{
    AppConfig, AppMetadata, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig,
};
pub use loader::{load, load_from};
