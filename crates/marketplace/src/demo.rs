//! First-run demo catalog.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use ecofinds_core::{Category, Condition, Price, ProductId, UserId};

use crate::Marketplace;
use crate::models::Product;
use crate::store::StoreError;

/// Seed the demo catalog if the products collection has never been written.
///
/// Returns `true` when the seed ran. An explicitly emptied catalog is left
/// alone: only a store with no products key at all gets seeded.
///
/// # Errors
///
/// Returns `StoreError` if reading or persisting fails.
pub fn seed_demo_data(marketplace: &Marketplace) -> Result<bool, StoreError> {
    let products = marketplace.products();

    if !products.is_unwritten()? {
        return Ok(false);
    }

    products.save(&demo_products())?;
    tracing::info!("demo catalog seeded");
    Ok(true)
}

fn demo_products() -> Vec<Product> {
    let listed_at = Utc
        .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
        .single()
        .unwrap_or_else(Utc::now);

    vec![Product {
        id: ProductId::new("prod_1234567890_xyz789"),
        title: "Vintage Camera".to_owned(),
        description:
            "Beautiful vintage camera in excellent condition. Perfect for photography enthusiasts."
                .to_owned(),
        category: Category::Electronics,
        price: Price::usd(Decimal::from(12000)),
        image_url: Some(
            "https://images.unsplash.com/photo-1606983340126-99ab4feaa64a?w=400&h=300&fit=crop"
                .to_owned(),
        ),
        seller_id: UserId::new("user_1234567890_abc123"),
        seller_name: "Camera Collector".to_owned(),
        condition: Condition::Excellent,
        location: "Mumbai, India".to_owned(),
        is_available: true,
        buyer_id: None,
        sold_at: None,
        created_at: listed_at,
        updated_at: listed_at,
    }]
}
