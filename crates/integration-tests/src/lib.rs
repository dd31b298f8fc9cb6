//! Integration tests for the FoodSave marketplace core.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p foodsave-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `browse_flow` - filter engine scenarios over the seed catalog
//! - `cart_session` - cart/favorites store behavior across sessions
//!
//! The helpers here stand in for the view layer: they build a seeded
//! catalog and a session store around a shared storage backend so a test
//! can simulate a page reload by reopening the store.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use foodsave_market::config::StorageKeys;
use foodsave_market::storage::MemoryBackend;
use foodsave_market::{CartStore, CatalogProvider, SeedCatalog};

/// A simulated browser session: one catalog, one storage backend, one store.
pub struct TestSession {
    pub catalog: Arc<dyn CatalogProvider>,
    pub backend: Arc<MemoryBackend>,
}

impl TestSession {
    /// Start a session over the seed catalog with empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(SeedCatalog::default()),
            backend: Arc::new(MemoryBackend::new()),
        }
    }

    /// Open a store against this session's storage, as application start
    /// does. Call again after dropping the previous store to simulate a
    /// reload.
    #[must_use]
    pub fn open_store(&self) -> CartStore {
        CartStore::open(
            Arc::clone(&self.catalog),
            Box::new(Arc::clone(&self.backend)),
            StorageKeys::default(),
        )
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}
