//! Product listing domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecofinds_core::{Category, Condition, Price, ProductId, UserId};

/// A second-hand product listing.
///
/// Invariant: `is_available == false` implies `buyer_id` and `sold_at` are
/// set. The repository's mark-sold path is the only writer of those fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// Product category (drives the sustainability weight).
    pub category: Category,
    /// Asking price.
    pub price: Price,
    /// Optional image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// User who listed the product.
    pub seller_id: UserId,
    /// Seller display name, denormalized for listing views.
    pub seller_name: String,
    /// Condition of the item.
    #[serde(default)]
    pub condition: Condition,
    /// Free-form location string.
    #[serde(default)]
    pub location: String,
    /// Whether the product can still be bought.
    pub is_available: bool,
    /// Buyer, set when sold.
    #[serde(default)]
    pub buyer_id: Option<UserId>,
    /// Sale timestamp, set when sold.
    #[serde(default)]
    pub sold_at: Option<DateTime<Utc>>,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether this product has been sold.
    #[must_use]
    pub const fn is_sold(&self) -> bool {
        !self.is_available
    }

    /// Apply a listing patch, updating only the fields it names.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
    }
}

/// Input for creating a listing.
///
/// The repository fills in the ID, timestamps, seller fields, and the
/// initial availability state.
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: Price,
    pub image_url: Option<String>,
    pub condition: Condition,
    pub location: String,
}

/// Named-field listing update.
///
/// `None` fields are left untouched. Sale state (`is_available`,
/// `buyer_id`, `sold_at`) is deliberately not patchable here.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub price: Option<Price>,
    pub image_url: Option<String>,
    pub condition: Option<Condition>,
    pub location: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new("prod_1_a"),
            title: "Vintage Camera".to_owned(),
            description: "Beautiful vintage camera in excellent condition.".to_owned(),
            category: Category::Electronics,
            price: Price::usd(Decimal::from(120)),
            image_url: None,
            seller_id: UserId::new("user_1_a"),
            seller_name: "Camera Collector".to_owned(),
            condition: Condition::Excellent,
            location: "Mumbai, India".to_owned(),
            is_available: true,
            buyer_id: None,
            sold_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_patch_cannot_touch_sale_state() {
        let mut product = sample_product();
        product.apply(ProductPatch {
            price: Some(Price::usd(Decimal::from(90))),
            ..ProductPatch::default()
        });

        assert_eq!(product.price.amount, Decimal::from(90));
        assert!(product.is_available);
        assert!(product.buyer_id.is_none());
    }

    #[test]
    fn test_serde_camel_case_keys() {
        let product = sample_product();
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("isAvailable").is_some());
        assert!(json.get("sellerId").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
