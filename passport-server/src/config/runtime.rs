//! Runtime configuration re-exports.
//!
//! The actual config types are defined in `passport-core::config`.
//! This module re-exports them for convenience.

pub use passport_core::config::{ConfigStore, GatewayConfig, ServerConfig};
