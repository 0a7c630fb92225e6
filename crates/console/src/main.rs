//! Forno Console - pizzeria management service.
//!
//! This binary serves the console's JSON API on port 3000.
//!
//! # Startup
//!
//! 1. Load configuration from the environment
//! 2. Open the local store (data dir with the `pizzas`/`pedidos`/`estoque`
//!    slots)
//! 3. Fetch the authoritative catalog from the catalog server; any failure
//!    resolves to an empty collection
//! 4. Bootstrap the domain store: merge remote over local pizzas, seed the
//!    default stock list on first run
//! 5. Serve the CRUD routes until SIGINT/SIGTERM

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod remote;
mod routes;
mod state;
mod storage;
mod store;

use config::ConsoleConfig;
use remote::CatalogClient;
use state::AppState;
use storage::LocalStore;
use store::DomainStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "forno_console=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ConsoleConfig::from_env().expect("Failed to load configuration");

    // Open the local store
    let storage = LocalStore::open(&config.data_dir).expect("Failed to open data directory");
    tracing::info!(data_dir = %config.data_dir.display(), "Local store opened");

    // Fetch the remote catalog once; a failed fetch yields an empty
    // collection and the console proceeds with local data only
    let catalog_client = CatalogClient::new(&config.catalog_url);
    let remote_catalog = catalog_client.fetch_catalog().await;

    // Build application state
    let store = DomainStore::bootstrap(storage, remote_catalog);
    let state = AppState::new(config.clone(), store);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("console listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
