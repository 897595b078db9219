//! Purchase history domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecofinds_core::{Category, PaymentMethod, Price, ProductId, PurchaseId, PurchaseStatus, UserId};

use crate::services::sustainability::ItemBreakdown;

/// A completed order in a buyer's purchase history.
///
/// Immutable once written: line items snapshot the product fields at sale
/// time, so later edits or deletion of the listing never corrupt the
/// historical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Unique purchase ID.
    pub id: PurchaseId,
    /// Sale-time snapshots of the purchased products.
    pub products: Vec<PurchaseLine>,
    /// Order total (unit price times quantity, summed).
    pub total_amount: Price,
    /// Payment method chosen at checkout.
    pub payment_method: PaymentMethod,
    /// Where the order ships.
    pub shipping_address: ShippingAddress,
    /// Sustainability contribution of the whole order.
    pub sustainability_contribution: u32,
    /// Per-line contribution breakdown.
    pub sustainability_breakdown: Vec<ItemBreakdown>,
    /// Order status.
    pub status: PurchaseStatus,
    /// When the purchase was made.
    pub purchase_date: DateTime<Utc>,
}

/// Sale-time snapshot of one purchased product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLine {
    /// The product that was bought (may no longer exist).
    pub product_id: ProductId,
    /// Title at sale time.
    pub title: String,
    /// Unit price at sale time.
    pub price: Price,
    /// Units bought.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Seller at sale time.
    pub seller_id: UserId,
    /// Seller display name at sale time.
    pub seller_name: String,
    /// Category at sale time.
    pub category: Category,
}

/// Records imported from before quantities were tracked default to one unit.
const fn default_quantity() -> u32 {
    1
}

/// Shipping details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub zip_code: String,
}

/// Everything the checkout computes for a purchase; the repository fills in
/// the ID and purchase date when it appends the record.
#[derive(Debug, Clone)]
pub struct PurchaseDraft {
    pub products: Vec<PurchaseLine>,
    pub total_amount: Price,
    pub payment_method: PaymentMethod,
    pub shipping_address: ShippingAddress,
    pub sustainability_contribution: u32,
    pub sustainability_breakdown: Vec<ItemBreakdown>,
    pub status: PurchaseStatus,
}
