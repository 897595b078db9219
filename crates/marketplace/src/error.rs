//! Unified error handling.
//!
//! Provides a unified `MarketplaceError` that layers above the per-service
//! error types. The core never presents errors to users; callers translate
//! these into whatever their surface shows.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::accounts::AccountError;
use crate::services::catalog::ListingError;
use crate::services::checkout::CheckoutError;
use crate::store::StoreError;

/// Application-level error type for the marketplace.
#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// Storage operation failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Account operation failed.
    #[error("account error: {0}")]
    Account(#[from] AccountError),

    /// Listing operation failed.
    #[error("listing error: {0}")]
    Listing(#[from] ListingError),

    /// Checkout failed.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type alias for `MarketplaceError`.
pub type Result<T> = std::result::Result<T, MarketplaceError>;
