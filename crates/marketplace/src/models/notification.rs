//! Seller notification domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecofinds_core::{NotificationId, Price, ProductId};

/// A "your item sold" notification, derived from purchase history.
///
/// Never stored: the notification service synthesizes these at read time
/// by scanning purchases, so they always reflect the current history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerNotification {
    /// Fresh ID for this synthesis (not stable across reads).
    pub id: NotificationId,
    /// The product that sold.
    pub product_id: ProductId,
    /// Product title.
    pub product_title: String,
    /// Buyer name from the order's shipping address.
    pub buyer_name: String,
    /// Buyer email from the order's shipping address.
    pub buyer_email: String,
    /// Units sold in this order.
    pub quantity: u32,
    /// Unit price at sale time.
    pub price: Price,
    /// When the order was placed.
    pub purchase_date: DateTime<Utc>,
    /// The whole order's sustainability contribution, not this line's
    /// share: a multi-seller order reports the same total to each seller.
    pub sustainability_contribution: u32,
}
