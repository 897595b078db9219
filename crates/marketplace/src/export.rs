//! Bulk data export.
//!
//! The export document is the marketplace's only wire-format boundary: a
//! single JSON object holding every collection, keyed the way the store
//! keys them, that parses back into the exact same shapes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecofinds_core::UserId;

use crate::Marketplace;
use crate::models::{CartItem, Product, Purchase, User};
use crate::store::StoreError;

/// Everything the marketplace has stored, in one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExport {
    /// All user records.
    pub users: Vec<User>,
    /// All product records.
    pub products: Vec<Product>,
    /// Each user's cart, keyed by user ID.
    pub carts: BTreeMap<UserId, Vec<CartItem>>,
    /// Each user's purchase history, keyed by user ID.
    pub purchases: BTreeMap<UserId, Vec<Purchase>>,
    /// When the export was taken.
    pub export_date: DateTime<Utc>,
}

impl DataExport {
    /// Snapshot the marketplace's full state.
    ///
    /// Carts and purchase histories are gathered per known user, the way
    /// the data viewer has always assembled them.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a backend read fails outright. Corrupt
    /// collections read as empty, as everywhere else.
    pub fn collect(marketplace: &Marketplace) -> Result<Self, StoreError> {
        let users = marketplace.users().all();
        let products = marketplace.products().all();

        let mut carts = BTreeMap::new();
        let mut purchases = BTreeMap::new();
        for user in &users {
            carts.insert(user.uid.clone(), marketplace.carts().items(&user.uid));
            purchases.insert(user.uid.clone(), marketplace.purchases().history(&user.uid));
        }

        Ok(Self {
            users,
            products,
            carts,
            purchases,
            export_date: Utc::now(),
        })
    }

    /// Serialize to pretty-printed JSON, the downloadable document.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a previously exported document.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the document does not match the
    /// export shape.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
