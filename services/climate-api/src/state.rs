//! Application state for the climate API.

use anyhow::Result;
use std::sync::Arc;

use storage::Catalog;

/// Shared application state.
///
/// The catalog is constructed once at startup and injected into every
/// handler; there is no module-level connection global.
pub struct AppState {
    /// Read-only observation catalog.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create a new AppState connected to the given database URL.
    pub async fn new(database_url: &str) -> Result<Self> {
        let catalog = Arc::new(Catalog::connect(database_url).await?);

        Ok(Self { catalog })
    }

    /// Create an AppState around an existing catalog (used by tests).
    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}
