//! Cart domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecofinds_core::{CartItemId, ProductId};

/// A line in a user's cart.
///
/// Carts hold at most one line per product: re-adding a product increments
/// `quantity` instead of appending a duplicate line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Unique cart line ID.
    pub id: CartItemId,
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Number of units.
    pub quantity: u32,
    /// When the product was first added.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Create a fresh single-unit line for a product.
    #[must_use]
    pub fn new(product_id: ProductId) -> Self {
        Self {
            id: CartItemId::generate(),
            product_id,
            quantity: 1,
            added_at: Utc::now(),
        }
    }
}
