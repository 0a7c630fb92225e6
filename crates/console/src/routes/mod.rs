//! Route handlers for the console's JSON API.
//!
//! Thin glue: every handler takes the domain store lock, calls one named
//! operation, and serializes the result. Edit/delete of an unknown
//! identifier answers `204 No Content` - the store's silent no-op policy
//! made visible on the wire.

pub mod orders;
pub mod pizzas;
pub mod stock;

use axum::Router;

use crate::state::AppState;

/// Build the combined API router.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(pizzas::router())
        .merge(orders::router())
        .merge(stock::router())
}
