//! Application state shared across all request handlers.

use crate::config::runtime::ConfigStore;
use passport_core::gateway::PaymentGateway;
use std::sync::Arc;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// Active payment gateway (can be swapped via SIGHUP).
    pub gateway: ConfigStore<Arc<dyn PaymentGateway>>,
    /// Deployment environment label, echoed into diagnostic logs.
    pub environment: Arc<str>,
}

impl AppState {
    /// Create a new AppState with the given gateway and environment label.
    pub fn new(gateway: Arc<dyn PaymentGateway>, environment: impl Into<Arc<str>>) -> Self {
        Self {
            gateway: ConfigStore::new(gateway),
            environment: environment.into(),
        }
    }

    /// The gateway to use for one request.
    ///
    /// The lock is released before returning so a reload never waits on an
    /// in-flight gateway call.
    pub async fn gateway(&self) -> Arc<dyn PaymentGateway> {
        self.gateway.snapshot().await
    }

    /// Swap the gateway (used during SIGHUP reload). Returns the new version.
    pub async fn update_gateway(&self, gateway: Arc<dyn PaymentGateway>) -> u64 {
        self.gateway.update(gateway).await
    }
}
