//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConsoleConfig;
use crate::store::DomainStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The domain store sits behind a single
/// `RwLock`, so mutations are fully serialized - the same one-logical-thread
/// model the console's single-user UI assumes.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ConsoleConfig,
    store: RwLock<DomainStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ConsoleConfig, store: DomainStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: RwLock::new(store),
            }),
        }
    }

    /// Get a reference to the console configuration.
    #[must_use]
    pub fn config(&self) -> &ConsoleConfig {
        &self.inner.config
    }

    /// Get a reference to the domain store lock.
    #[must_use]
    pub fn store(&self) -> &RwLock<DomainStore> {
        &self.inner.store
    }
}
