//! Shared handler state

use std::sync::Arc;

use crate::observability::MetricsRegistry;
use crate::store::SongStore;

use super::errors::ApiResult;

/// State injected into every handler
///
/// Constructed once at startup, after the schema has been ensured.
#[derive(Debug)]
pub struct AppState {
    pub store: SongStore,
    pub metrics: MetricsRegistry,
}

/// Shared state type
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: SongStore) -> Self {
        Self {
            store,
            metrics: MetricsRegistry::new(),
        }
    }

    pub fn shared(store: SongStore) -> SharedState {
        Arc::new(Self::new(store))
    }

    /// Count a failed handler result in the metrics registry
    pub fn record<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let Err(err) = &result {
            if err.is_client_error() {
                self.metrics.increment_requests_rejected();
            } else {
                self.metrics.increment_store_failures();
            }
        }
        result
    }
}
