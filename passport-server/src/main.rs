//! Passport Checkout Server
//!
//! Validates checkout requests and creates PIX transactions on the
//! ViperPay payment gateway.

mod api;
mod config;
mod server;
mod shutdown;
mod state;

use clap::Parser;
use config::ConfigLoader;
use passport_core::gateway::PaymentGateway;
use server::{build_router, run_server};
use shutdown::spawn_config_reload_handler;
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Passport Checkout - PIX payment creation endpoint
#[derive(Parser, Debug)]
#[command(name = "passport-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./passport-config.toml")]
    config: PathBuf,

    /// Override the listen address (e.g., 0.0.0.0:3000)
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Deployment environment label included in diagnostic logs
    #[arg(short, long, env = "PASSPORT_ENV", default_value = "development")]
    environment: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::info!(
        environment = %args.environment,
        "Starting passport-server v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration
    let config_loader = Arc::new(ConfigLoader::new(
        &args.config,
        args.listen,
        args.environment,
    ));
    let loaded_config = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let listen_addr = loaded_config.server.listen;
    tracing::info!("Configuration loaded from {:?}", args.config);

    // Build the gateway client
    let client = loaded_config.gateway.build_client().map_err(|e| {
        tracing::error!("Failed to build ViperPay client: {}", e);
        e
    })?;
    tracing::info!(
        base_url = %loaded_config.gateway.base_url,
        timeout = ?loaded_config.gateway.timeout,
        "ViperPay client ready"
    );
    let gateway: Arc<dyn PaymentGateway> = Arc::new(client);

    // Create application state
    let state = AppState::new(gateway, loaded_config.server.environment);

    // Spawn config reload handler (listens for SIGHUP)
    let shutdown_notify = spawn_config_reload_handler(state.clone(), config_loader);

    // Build the router
    let router = build_router(state);

    // Run the server
    tracing::info!("Starting HTTP server on {}", listen_addr);
    let result = run_server(router, listen_addr).await;

    // Signal the config reload handler to stop
    shutdown_notify.notify_one();
    tracing::info!("Server shutdown complete");

    result.map_err(Into::into)
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
