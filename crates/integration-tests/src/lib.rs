//! Integration test helpers for EcoFinds.
//!
//! Scenarios drive the library directly over the in-memory backend; the
//! persistence tests swap in a `JsonFileStore` on a temp path.

use rust_decimal::Decimal;

use ecofinds_core::{Category, Price};
use ecofinds_marketplace::Marketplace;
use ecofinds_marketplace::models::{NewProduct, Product, ShippingAddress, User};
use ecofinds_marketplace::services::{CheckoutOutcome, CheckoutRequest};

/// A fresh in-memory marketplace.
#[must_use]
pub fn marketplace() -> Marketplace {
    Marketplace::in_memory()
}

/// Test helper: register a user.
///
/// # Panics
///
/// Panics if sign-up fails; these are fixture emails, so it never should.
#[must_use]
pub fn sign_up(marketplace: &Marketplace, username: &str, email: &str) -> User {
    marketplace
        .accounts()
        .sign_up(username, email)
        .expect("fixture sign-up failed")
}

/// Test helper: publish a listing for a seller.
///
/// # Panics
///
/// Panics if listing creation fails.
#[must_use]
pub fn list_product(
    marketplace: &Marketplace,
    seller: &User,
    title: &str,
    category: Category,
    amount: i64,
) -> Product {
    marketplace
        .catalog()
        .create_listing(
            seller,
            NewProduct {
                title: title.to_owned(),
                description: format!("{title} in great shape"),
                category,
                price: Price::usd(Decimal::from(amount)),
                ..NewProduct::default()
            },
        )
        .expect("fixture listing failed")
}

/// A valid checkout request for a buyer.
#[must_use]
pub fn checkout_request(buyer: &User) -> CheckoutRequest {
    CheckoutRequest {
        payment_method: ecofinds_core::PaymentMethod::CreditCard,
        shipping_address: ShippingAddress {
            full_name: buyer.username.clone(),
            email: buyer.email.as_str().to_owned(),
            address: "42 Circular Rd".to_owned(),
            city: "Portsmouth".to_owned(),
            zip_code: "PO1 2AB".to_owned(),
        },
    }
}

/// Test helper: put a product in the buyer's cart and check out.
///
/// # Panics
///
/// Panics if any step fails.
#[must_use]
pub fn buy(marketplace: &Marketplace, buyer: &User, product: &Product) -> CheckoutOutcome {
    marketplace
        .cart()
        .add(&buyer.uid, &product.id)
        .expect("fixture add-to-cart failed");
    marketplace
        .checkout()
        .checkout(buyer, checkout_request(buyer))
        .expect("fixture checkout failed")
}
