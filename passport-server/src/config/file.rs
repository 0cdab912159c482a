//! TOML file configuration structures.
//!
//! These structs directly map to the `passport-config.toml` file format.

use serde::Deserialize;
use std::net::SocketAddr;
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
}

/// Server configuration section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// ViperPay gateway section.
#[derive(Clone, Deserialize)]
pub struct GatewayConfig {
    /// Root URL of the gateway API.
    pub base_url: Url,
    /// Secret API key. May be left empty and supplied via `VIPERPAY_API_KEY`.
    #[serde(default)]
    pub api_key: String,
    /// Total request timeout in seconds. Omit to wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parsing() {
        let toml_str = r#"
[server]
listen = "127.0.0.1:3000"

[gateway]
base_url = "https://api.viperpay.example/v1/"
api_key = "sk_test_123"
timeout_secs = 30
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen.port(), 3000);
        assert_eq!(config.gateway.base_url.host_str(), Some("api.viperpay.example"));
        assert_eq!(config.gateway.api_key, "sk_test_123");
        assert_eq!(config.gateway.timeout_secs, Some(30));
    }

    #[test]
    fn test_defaults() {
        let toml_str = r#"
[gateway]
base_url = "https://api.viperpay.example/v1/"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen, default_listen_addr());
        assert!(config.gateway.api_key.is_empty());
        assert_eq!(config.gateway.timeout_secs, None);
    }

    #[test]
    fn test_missing_gateway_section_is_rejected() {
        let toml_str = r#"
[server]
listen = "127.0.0.1:3000"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
