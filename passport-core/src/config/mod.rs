//! Configuration types for Passport checkout.
//!
//! These types represent the validated runtime configuration used by the
//! server. The actual config loading/parsing is handled by the server crate.

mod config_store;
mod gateway;
mod server;

pub use config_store::ConfigStore;
pub use gateway::GatewayConfig;
pub use server::ServerConfig;
