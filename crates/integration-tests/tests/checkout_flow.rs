//! End-to-end checkout scenarios.

use ecofinds_core::{Category, SustainabilityLevel};
use ecofinds_integration_tests::{buy, checkout_request, list_product, marketplace, sign_up};

#[test]
fn full_purchase_flow_updates_every_collection() {
    let mk = marketplace();
    let seller = sign_up(&mk, "collector", "collector@example.com");
    let buyer = sign_up(&mk, "ada", "ada@example.com");

    let camera = list_product(&mk, &seller, "Vintage Camera", Category::Electronics, 120);
    assert_eq!(mk.catalog().available_products().len(), 1);

    let outcome = buy(&mk, &buyer, &camera);

    // Listing is sold and off the shelf
    let sold = mk.catalog().product(&camera.id).expect("product exists");
    assert!(sold.is_sold());
    assert_eq!(sold.buyer_id.as_ref(), Some(&buyer.uid));
    assert!(mk.catalog().available_products().is_empty());

    // Cart is cleared
    assert!(mk.cart().items(&buyer.uid).is_empty());

    // Purchase history holds the snapshot
    let history = mk.purchases().history(&buyer.uid);
    assert_eq!(history.len(), 1);
    let line = history
        .first()
        .and_then(|p| p.products.first())
        .expect("purchase line");
    assert_eq!(line.title, "Vintage Camera");
    assert_eq!(line.seller_id, seller.uid);

    // Electronics at medium price: 25 points
    assert_eq!(outcome.order_impact.total_contribution, 25);

    // Buyer's lifetime score is persisted
    let refreshed = mk.users().get(&buyer.uid).expect("buyer exists");
    assert_eq!(refreshed.sustainability_score, 25);
    assert_eq!(refreshed.total_items_purchased, 1);
    assert_eq!(
        refreshed.sustainability_level,
        SustainabilityLevel::Beginner
    );
}

#[test]
fn adding_same_product_twice_merges_then_checks_out_once() {
    let mk = marketplace();
    let seller = sign_up(&mk, "collector", "collector@example.com");
    let buyer = sign_up(&mk, "ada", "ada@example.com");

    let lamp = list_product(&mk, &seller, "Brass Lamp", Category::HomeAndGarden, 60);

    mk.cart().add(&buyer.uid, &lamp.id).expect("add");
    let items = mk.cart().add(&buyer.uid, &lamp.id).expect("add again");
    assert_eq!(items.len(), 1);
    assert_eq!(items.first().map(|i| i.quantity), Some(2));

    let outcome = mk
        .checkout()
        .checkout(&buyer, checkout_request(&buyer))
        .expect("checkout");

    // One line, quantity 2, total 120
    let purchase_line = outcome.purchase.products.first().expect("line");
    assert_eq!(purchase_line.quantity, 2);
    assert_eq!(
        outcome.purchase.total_amount.amount,
        rust_decimal::Decimal::from(120)
    );

    // Order impact scores the line once; lifetime counts both units
    assert_eq!(outcome.order_impact.total_contribution, 12);
    assert_eq!(outcome.lifetime.total_items, 2);
}

#[test]
fn second_buyer_cannot_see_sold_listing() {
    let mk = marketplace();
    let seller = sign_up(&mk, "collector", "collector@example.com");
    let first = sign_up(&mk, "ada", "ada@example.com");
    let second = sign_up(&mk, "ben", "ben@example.com");

    let chair = list_product(&mk, &seller, "Reading Chair", Category::Furniture, 150);
    let _ = buy(&mk, &first, &chair);

    assert!(mk.catalog().available_products().is_empty());

    // The second buyer's independent cart is untouched
    assert!(mk.cart().items(&second.uid).is_empty());
}

#[test]
fn multi_item_checkout_snapshots_survive_listing_deletion() {
    let mk = marketplace();
    let seller = sign_up(&mk, "collector", "collector@example.com");
    let buyer = sign_up(&mk, "ada", "ada@example.com");

    let camera = list_product(&mk, &seller, "Vintage Camera", Category::Electronics, 300);
    let novel = list_product(&mk, &seller, "First Edition", Category::BooksAndMedia, 45);

    mk.cart().add(&buyer.uid, &camera.id).expect("add camera");
    mk.cart().add(&buyer.uid, &novel.id).expect("add novel");
    let outcome = mk
        .checkout()
        .checkout(&buyer, checkout_request(&buyer))
        .expect("checkout");

    // Electronics at 300 is high band: round(25 * 1.2) = 30
    // Books at 45 is low band: round(8 * 0.8) = 6
    assert_eq!(outcome.order_impact.total_contribution, 36);
    assert_eq!(outcome.purchase.products.len(), 2);

    // Seller deletes both listings; history is unaffected
    mk.catalog()
        .delete_listing(&seller.uid, &camera.id)
        .expect("delete");
    mk.catalog()
        .delete_listing(&seller.uid, &novel.id)
        .expect("delete");

    let history = mk.purchases().history(&buyer.uid);
    let titles: Vec<&str> = history
        .first()
        .map(|p| p.products.iter().map(|l| l.title.as_str()).collect())
        .unwrap_or_default();
    assert_eq!(titles, vec!["Vintage Camera", "First Edition"]);
}
