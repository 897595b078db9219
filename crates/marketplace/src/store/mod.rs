//! Entity persistence over a key-value storage backend.
//!
//! # Key layout
//!
//! All keys share a configurable namespace (default `ecofinds`):
//!
//! - `<ns>_users` - all user records
//! - `<ns>_products` - all product records
//! - `<ns>_cart_<userId>` - one cart per user
//! - `<ns>_purchases_<userId>` - one purchase history per user
//! - `<ns>_current_user` - session marker (single serialized user)
//!
//! Collections are whole-value JSON arrays: reads deserialize the full
//! array, writes replace it. A missing key reads as an empty collection,
//! and a corrupt payload fails closed to empty (warn-logged) rather than
//! erroring the read path.

pub mod backend;
pub mod carts;
pub mod products;
pub mod purchases;
pub mod session;
pub mod users;

pub use backend::{JsonFileStore, MemoryStore, StorageBackend};
pub use carts::CartRepository;
pub use products::ProductRepository;
pub use purchases::PurchaseRepository;
pub use session::SessionStore;
pub use users::UserRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend itself failed (e.g., file I/O).
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A record could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A uniqueness constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Storage key for the users collection.
#[must_use]
pub fn users_key(namespace: &str) -> String {
    format!("{namespace}_users")
}

/// Storage key for the products collection.
#[must_use]
pub fn products_key(namespace: &str) -> String {
    format!("{namespace}_products")
}

/// Storage key for one user's cart.
#[must_use]
pub fn cart_key(namespace: &str, user_id: &ecofinds_core::UserId) -> String {
    format!("{namespace}_cart_{user_id}")
}

/// Storage key for one user's purchase history.
#[must_use]
pub fn purchases_key(namespace: &str, user_id: &ecofinds_core::UserId) -> String {
    format!("{namespace}_purchases_{user_id}")
}

/// Key prefix shared by every user's purchase history.
#[must_use]
pub fn purchases_key_prefix(namespace: &str) -> String {
    format!("{namespace}_purchases_")
}

/// Storage key for the session marker.
#[must_use]
pub fn current_user_key(namespace: &str) -> String {
    format!("{namespace}_current_user")
}

/// Read a whole collection, failing closed to empty.
///
/// A missing key, a backend read failure, and a corrupt payload all read
/// as an empty collection; the latter two are warn-logged.
pub(crate) fn read_collection<T: DeserializeOwned>(
    backend: &dyn StorageBackend,
    key: &str,
) -> Vec<T> {
    match backend.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(key, error = %err, "corrupt collection payload, reading as empty");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::warn!(key, error = %err, "storage read failed, reading as empty");
            Vec::new()
        }
    }
}

/// Replace a whole collection.
pub(crate) fn write_collection<T: Serialize>(
    backend: &dyn StorageBackend,
    key: &str,
    records: &[T],
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(records)?;
    backend.set(key, &raw)
}
