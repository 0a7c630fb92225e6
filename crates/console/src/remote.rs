//! Remote catalog fetch.
//!
//! The console optionally seeds its pizza catalog from a catalog server at
//! startup. Any failure - network error, non-2xx status, malformed body,
//! `success: false` - resolves to an empty collection with a warning log;
//! the console then proceeds with whatever data is available locally.

use serde::Deserialize;
use tracing::{debug, warn};

use forno_core::{PizzaRecord, RecordOrigin};

/// Response envelope for `GET /api/pizzas`.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    success: bool,
    #[serde(default)]
    data: Option<Vec<PizzaRecord>>,
}

/// Errors from a single catalog fetch attempt.
///
/// Never escapes [`CatalogClient::fetch_catalog`]; kept as a type so the
/// failure modes are logged distinctly.
#[derive(Debug, thiserror::Error)]
enum CatalogFetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog server rejected the request (status {0})")]
    Rejected(reqwest::StatusCode),
    #[error("catalog server reported success: false")]
    Unsuccessful,
}

/// Client for the remote catalog server.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Create a new catalog client for `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let endpoint = format!("{}/api/pizzas", base_url.trim_end_matches('/'));
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Fetch the authoritative pizza catalog.
    ///
    /// Every fetched record is re-tagged [`RecordOrigin::Remote`] at
    /// ingestion, whatever the payload claimed. On any failure the result is
    /// the empty collection - callers never see an error.
    pub async fn fetch_catalog(&self) -> Vec<PizzaRecord> {
        match self.try_fetch().await {
            Ok(catalog) => {
                debug!(count = catalog.len(), "Fetched remote catalog");
                catalog
            }
            Err(err) => {
                warn!(endpoint = %self.endpoint, error = %err, "Catalog fetch failed, using local data only");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<PizzaRecord>, CatalogFetchError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogFetchError::Rejected(status));
        }

        let body: CatalogResponse = response.json().await?;
        if !body.success {
            return Err(CatalogFetchError::Unsuccessful);
        }

        let mut catalog = body.data.unwrap_or_default();
        for pizza in &mut catalog {
            pizza.origin = RecordOrigin::Remote;
        }
        Ok(catalog)
    }
}
