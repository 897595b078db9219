//! Purchase history repository.
//!
//! Histories are stored per buyer under `<ns>_purchases_<userId>` and are
//! append-only: nothing here mutates or removes an existing purchase.

use chrono::Utc;

use ecofinds_core::{PurchaseId, UserId};

use super::{
    StorageBackend, StoreError, purchases_key, purchases_key_prefix, read_collection,
    write_collection,
};
use crate::models::{Purchase, PurchaseDraft};

/// Repository for per-buyer purchase histories.
pub struct PurchaseRepository<'a> {
    backend: &'a dyn StorageBackend,
    namespace: &'a str,
}

impl<'a> PurchaseRepository<'a> {
    /// Create a new purchase repository.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend, namespace: &'a str) -> Self {
        Self { backend, namespace }
    }

    fn key(&self, user_id: &UserId) -> String {
        purchases_key(self.namespace, user_id)
    }

    /// A buyer's purchase history, oldest first. Never fails: missing or
    /// corrupt data reads as empty.
    #[must_use]
    pub fn history(&self, user_id: &UserId) -> Vec<Purchase> {
        read_collection(self.backend, &self.key(user_id))
    }

    /// Replace a buyer's whole history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the backend write fails.
    pub fn save(&self, user_id: &UserId, purchases: &[Purchase]) -> Result<(), StoreError> {
        write_collection(self.backend, &self.key(user_id), purchases)
    }

    /// Append a purchase to a buyer's history and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn add(&self, user_id: &UserId, draft: PurchaseDraft) -> Result<Purchase, StoreError> {
        let mut purchases = self.history(user_id);

        let purchase = Purchase {
            id: PurchaseId::generate(),
            products: draft.products,
            total_amount: draft.total_amount,
            payment_method: draft.payment_method,
            shipping_address: draft.shipping_address,
            sustainability_contribution: draft.sustainability_contribution,
            sustainability_breakdown: draft.sustainability_breakdown,
            status: draft.status,
            purchase_date: Utc::now(),
        };

        purchases.push(purchase.clone());
        self.save(user_id, &purchases)?;

        Ok(purchase)
    }

    /// Every buyer's history, discovered by key enumeration.
    ///
    /// This is the notification service's scan path; it covers all buyers,
    /// not just the caller.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot enumerate keys.
    pub fn all_histories(&self) -> Result<Vec<(UserId, Vec<Purchase>)>, StoreError> {
        let prefix = purchases_key_prefix(self.namespace);
        let mut histories = Vec::new();

        for key in self.backend.keys()? {
            if let Some(uid) = key.strip_prefix(&prefix) {
                let user_id = UserId::new(uid);
                histories.push((user_id.clone(), self.history(&user_id)));
            }
        }

        Ok(histories)
    }
}
