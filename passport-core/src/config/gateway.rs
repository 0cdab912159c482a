//! Payment gateway configuration.

use passport_sdk::client::{ClientError, ViperPayClient};
use std::time::Duration;
use url::Url;

/// Connection settings for the ViperPay gateway.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Root URL of the gateway API.
    pub base_url: Url,
    /// Secret API key sent as a bearer token.
    pub api_key: String,
    /// Total request timeout. `None` waits for the gateway indefinitely.
    pub timeout: Option<Duration>,
}

impl GatewayConfig {
    /// Build a client for these settings.
    pub fn build_client(&self) -> Result<ViperPayClient, ClientError> {
        let client = ViperPayClient::new(self.base_url.clone(), self.api_key.clone());
        match self.timeout {
            Some(timeout) => client.with_timeout(timeout),
            None => Ok(client),
        }
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GatewayConfig {
            base_url: Url::parse("https://api.viperpay.example/v1/").unwrap(),
            api_key: "sk_live_secret".to_string(),
            timeout: None,
        };
        let printed = format!("{config:?}");
        assert!(!printed.contains("sk_live_secret"));
        assert!(printed.contains("api.viperpay.example"));
    }

    #[test]
    fn test_build_client_keeps_base_url() {
        let config = GatewayConfig {
            base_url: Url::parse("https://api.viperpay.example/v1/").unwrap(),
            api_key: "sk_test".to_string(),
            timeout: Some(Duration::from_secs(30)),
        };
        let client = config.build_client().unwrap();
        assert_eq!(client.base_url(), &config.base_url);
    }
}
