//! docshelf - a flat-file document server.
//!
//! This binary starts the HTTP server and configures all components.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docshelf::{
    config::Config,
    server::{create_router, AppState, Credentials, RouterConfig},
    store::FileStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    // The document directory must exist before the first listing
    if let Err(e) = tokio::fs::create_dir_all(&config.data_dir).await {
        error!(
            "Failed to create data directory {}: {}",
            config.data_dir.display(),
            e
        );
        return ExitCode::FAILURE;
    }

    info!("docshelf v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Data directory: {}", config.data_dir.display());
    info!("  Admin user: {}", config.admin_username);

    let store = FileStore::new(&config.data_dir);
    let credentials = Credentials::new(&config.admin_username, config.admin_password_or_empty());
    let state = AppState::new(store, credentials);

    let router_config = RouterConfig::new().with_tracing(!config.no_tracing);
    let router = create_router(state, router_config);

    let addr = config.bind_address();
    info!("Server listening on http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "docshelf=debug,tower_http=debug"
    } else {
        "docshelf=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
