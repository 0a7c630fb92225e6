//! Integration tests for Forno.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p forno-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `startup_sync` - Remote fetch, catalog merge, and persistence at startup
//! - `console_api` - JSON API behavior over a running console
//!
//! This crate provides the shared harness: a stub catalog server answering
//! `GET /api/pizzas` with a canned payload, and a fully wired console
//! (temp-dir local store, real fetch adapter, real routes) on an ephemeral
//! port.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use axum::{Json, Router, routing::get};

use forno_console::config::ConsoleConfig;
use forno_console::remote::CatalogClient;
use forno_console::routes;
use forno_console::state::AppState;
use forno_console::storage::LocalStore;
use forno_console::store::DomainStore;
use forno_core::{PizzaRecord, Price, RecordOrigin};

/// Serve `payload` at `GET /api/pizzas` on an ephemeral port.
///
/// Returns the base URL of the stub server. The server task lives until the
/// test process exits.
///
/// # Panics
///
/// Panics if an ephemeral port cannot be bound.
pub async fn spawn_catalog_stub(payload: serde_json::Value) -> String {
    let app = Router::new().route(
        "/api/pizzas",
        get(move || {
            let payload = payload.clone();
            async move { Json(payload) }
        }),
    );
    spawn(app).await
}

/// Serve an arbitrary router on an ephemeral port; returns its base URL.
///
/// # Panics
///
/// Panics if an ephemeral port cannot be bound.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}

/// Wire up a full console against `catalog_url` and serve it.
///
/// Runs the same startup sequence as the binary: open the local store, fetch
/// the remote catalog, bootstrap the domain store, mount the routes.
///
/// # Panics
///
/// Panics if the data directory cannot be opened or a port bound.
pub async fn spawn_console(data_dir: &Path, catalog_url: &str) -> String {
    let config = ConsoleConfig {
        data_dir: data_dir.to_path_buf(),
        catalog_url: catalog_url.to_owned(),
        host: "127.0.0.1".parse().expect("loopback addr"),
        port: 0,
    };

    let storage = LocalStore::open(&config.data_dir).expect("open data dir");
    let remote_catalog = CatalogClient::new(&config.catalog_url).fetch_catalog().await;
    let store = DomainStore::bootstrap(storage, remote_catalog);
    let state = AppState::new(config, store);

    let app = Router::new().merge(routes::routes()).with_state(state);
    spawn(app).await
}

/// A pizza record with the given UUID string, for deterministic fixtures.
///
/// # Panics
///
/// Panics if `id` is not a valid UUID.
#[must_use]
pub fn fixture_pizza(id: &str, name: &str, price: &str) -> PizzaRecord {
    PizzaRecord {
        id: uuid::Uuid::parse_str(id).expect("fixture uuid").into(),
        name: name.to_owned(),
        price: Price::brl(price.parse().expect("fixture price")),
        available: true,
        origin: RecordOrigin::Local,
        created_at: chrono::Utc::now(),
    }
}

/// Build the catalog server's success envelope around `records`.
///
/// # Panics
///
/// Panics if the records fail to serialize.
#[must_use]
pub fn catalog_envelope(records: &[PizzaRecord]) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": serde_json::to_value(records).expect("serialize fixtures"),
    })
}
