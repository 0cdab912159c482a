//! Configuration module for passport-server.
//!
//! Handles loading configuration from TOML files, CLI arguments,
//! and environment variables.

pub mod file;
pub mod runtime;

use crate::config::file::{FileConfig, GatewayConfig as FileGatewayConfig};
use crate::config::runtime::{GatewayConfig, ServerConfig};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable that overrides `gateway.api_key`.
pub const API_KEY_ENV: &str = "VIPERPAY_API_KEY";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Loaded configuration result containing all parts.
#[derive(Debug)]
pub struct LoadedConfig {
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    listen_override: Option<SocketAddr>,
    environment: String,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(
        config_path: impl AsRef<Path>,
        listen_override: Option<SocketAddr>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
            environment: environment.into(),
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply CLI and environment overrides
    /// 3. Validate the configuration
    /// 4. Build the loaded configuration
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        self.load_str(&config_content, std::env::var(API_KEY_ENV).ok())
    }

    /// Reload the configuration (used during SIGHUP).
    pub fn reload(&self) -> Result<LoadedConfig, ConfigError> {
        self.load()
    }

    fn load_str(
        &self,
        config_content: &str,
        api_key_override: Option<String>,
    ) -> Result<LoadedConfig, ConfigError> {
        let mut file_config: FileConfig = toml::from_str(config_content)?;

        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }
        if let Some(api_key) = api_key_override.filter(|key| !key.is_empty()) {
            file_config.gateway.api_key = api_key;
        }

        validate(&file_config.gateway)?;

        Ok(self.build_loaded_config(file_config))
    }

    fn build_loaded_config(&self, file_config: FileConfig) -> LoadedConfig {
        LoadedConfig {
            server: ServerConfig {
                listen: file_config.server.listen,
                environment: self.environment.clone(),
            },
            gateway: convert_gateway(file_config.gateway),
        }
    }
}

fn validate(gateway: &FileGatewayConfig) -> Result<(), ConfigError> {
    if gateway.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "gateway.api_key is empty; set it in the config file or via {API_KEY_ENV}"
        )));
    }
    if !matches!(gateway.base_url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError(format!(
            "gateway.base_url must be http or https, got {}",
            gateway.base_url
        )));
    }
    if gateway.timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "gateway.timeout_secs must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn convert_gateway(g: FileGatewayConfig) -> GatewayConfig {
    GatewayConfig {
        base_url: with_trailing_slash(g.base_url),
        api_key: g.api_key,
        timeout: g.timeout_secs.map(Duration::from_secs),
    }
}

/// Endpoint paths are joined relative to the base URL, which drops the last
/// path segment unless it ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
