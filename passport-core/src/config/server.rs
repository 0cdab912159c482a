//! Server configuration.

use std::net::SocketAddr;

/// Server configuration with runtime values.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address and port to listen on.
    pub listen: SocketAddr,
    /// Deployment environment label (e.g. `development`, `production`).
    ///
    /// Only ever echoed into diagnostic logs.
    pub environment: String,
}
