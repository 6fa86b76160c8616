//! API server state

use std::sync::Arc;

use crate::catalog::CafeCatalog;
use crate::query::SearchOptions;

/// API server state, shared read-only by every request
#[derive(Clone)]
pub struct AppState {
    /// Café catalog
    pub catalog: Arc<CafeCatalog>,

    /// Search matching mode
    pub search: SearchOptions,
}

impl AppState {
    pub fn new(catalog: CafeCatalog, search: SearchOptions) -> Self {
        Self {
            catalog: Arc::new(catalog),
            search,
        }
    }
}

impl Default for AppState {
    /// Built-in catalog with case-sensitive search
    fn default() -> Self {
        Self::new(CafeCatalog::default(), SearchOptions::default())
    }
}
