//! Marketplace facade shared across callers.

use std::sync::Arc;

use crate::config::{ConfigError, MarketplaceConfig};
use crate::services::{
    AccountService, CartService, CatalogService, CheckoutService, NotificationService,
};
use crate::store::{
    CartRepository, JsonFileStore, MemoryStore, ProductRepository, PurchaseRepository,
    SessionStore, StorageBackend, UserRepository,
};

/// The marketplace: one storage backend plus configuration.
///
/// Cheaply cloneable and `Send + Sync`; repositories and services are
/// constructed on demand and borrow the backend.
#[derive(Clone)]
pub struct Marketplace {
    backend: Arc<dyn StorageBackend>,
    config: MarketplaceConfig,
}

impl Marketplace {
    /// Create a marketplace over an explicit backend.
    #[must_use]
    pub fn new(config: MarketplaceConfig, backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend, config }
    }

    /// An in-memory marketplace with default configuration.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MarketplaceConfig::default(), Arc::new(MemoryStore::new()))
    }

    /// Build the backend the configuration selects: the JSON file store
    /// when a data file is configured, in-memory otherwise.
    #[must_use]
    pub fn from_config(config: MarketplaceConfig) -> Self {
        let backend: Arc<dyn StorageBackend> = match &config.data_file {
            Some(path) => Arc::new(JsonFileStore::open(path)),
            None => Arc::new(MemoryStore::new()),
        };
        Self::new(config, backend)
    }

    /// Load configuration from the environment and build the marketplace.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the environment configuration is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::from_config(MarketplaceConfig::from_env()?))
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &MarketplaceConfig {
        &self.config
    }

    /// The storage key namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    /// Get a reference to the storage backend.
    #[must_use]
    pub fn backend(&self) -> &dyn StorageBackend {
        self.backend.as_ref()
    }

    /// User repository.
    #[must_use]
    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(self.backend(), self.namespace())
    }

    /// Product repository.
    #[must_use]
    pub fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(self.backend(), self.namespace())
    }

    /// Cart repository.
    #[must_use]
    pub fn carts(&self) -> CartRepository<'_> {
        CartRepository::new(self.backend(), self.namespace())
    }

    /// Purchase repository.
    #[must_use]
    pub fn purchases(&self) -> PurchaseRepository<'_> {
        PurchaseRepository::new(self.backend(), self.namespace())
    }

    /// Session marker store.
    #[must_use]
    pub fn session(&self) -> SessionStore<'_> {
        SessionStore::new(self.backend(), self.namespace())
    }

    /// Account service.
    #[must_use]
    pub fn accounts(&self) -> AccountService<'_> {
        AccountService::new(self.backend(), self.namespace())
    }

    /// Catalog service.
    #[must_use]
    pub fn catalog(&self) -> CatalogService<'_> {
        CatalogService::new(self.backend(), self.namespace())
    }

    /// Cart service.
    #[must_use]
    pub fn cart(&self) -> CartService<'_> {
        CartService::new(self.backend(), self.namespace())
    }

    /// Checkout service.
    #[must_use]
    pub fn checkout(&self) -> CheckoutService<'_> {
        CheckoutService::new(self.backend(), self.namespace())
    }

    /// Notification service.
    #[must_use]
    pub fn notifications(&self) -> NotificationService<'_> {
        NotificationService::new(self.backend(), self.namespace())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_backend() {
        let marketplace = Marketplace::in_memory();
        let clone = marketplace.clone();

        marketplace
            .accounts()
            .sign_up("ada", "ada@example.com")
            .unwrap();

        assert_eq!(clone.users().all().len(), 1);
    }

    #[test]
    fn test_from_config_without_data_file_is_in_memory() {
        let marketplace =
            Marketplace::from_config(MarketplaceConfig::with_namespace("ecofinds_test"));
        assert_eq!(marketplace.namespace(), "ecofinds_test");
        assert!(marketplace.users().all().is_empty());
    }
}
