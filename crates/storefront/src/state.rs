//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::session::AuthStore;
use crate::storage::{LocalStore, StorageError};

/// Error initializing application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("failed to open storage: {0}")]
    Storage(#[from] StorageError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// immutable catalog, the durable stores, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    store: LocalStore,
    cart: CartStore,
    auth: AuthStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Loads the catalog from `config.catalog_path` and opens the storage
    /// directory at `config.storage_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or the storage
    /// directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, StateError> {
        let catalog = Catalog::load(&config.catalog_path, config.tax_rate, config.shipping_fee)?;
        let store = LocalStore::open(&config.storage_dir)?;
        let cart = CartStore::new(store.clone());
        let auth = AuthStore::new(store.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                store,
                cart,
                auth,
            }),
        })
    }

    /// Build state from already-constructed parts (used by tests).
    #[must_use]
    pub fn from_parts(config: StorefrontConfig, catalog: Catalog, store: LocalStore) -> Self {
        let cart = CartStore::new(store.clone());
        let auth = AuthStore::new(store.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                store,
                cart,
                auth,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the underlying key-value store.
    #[must_use]
    pub fn store(&self) -> &LocalStore {
        &self.inner.store
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the auth store.
    #[must_use]
    pub fn auth(&self) -> &AuthStore {
        &self.inner.auth
    }
}
