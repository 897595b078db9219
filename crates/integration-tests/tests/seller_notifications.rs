//! Seller notification derivation across real checkout flows.

use ecofinds_core::Category;
use ecofinds_integration_tests::{buy, checkout_request, list_product, marketplace, sign_up};

#[test]
fn each_seller_sees_only_their_sales() {
    let mk = marketplace();
    let alice = sign_up(&mk, "alice", "alice@example.com");
    let bob = sign_up(&mk, "bob", "bob@example.com");
    let carol = sign_up(&mk, "carol", "carol@example.com");

    let camera = list_product(&mk, &alice, "Vintage Camera", Category::Electronics, 120);
    let shelf = list_product(&mk, &bob, "Oak Bookshelf", Category::Furniture, 80);

    let _ = buy(&mk, &carol, &camera);
    let _ = buy(&mk, &carol, &shelf);

    let for_alice = mk
        .notifications()
        .for_seller(&alice.uid)
        .expect("derivation");
    assert_eq!(for_alice.len(), 1);
    let notification = for_alice.first().expect("notification");
    assert_eq!(notification.product_title, "Vintage Camera");
    assert_eq!(notification.buyer_name, "carol");
    assert_eq!(notification.buyer_email, "carol@example.com");
    assert_eq!(notification.quantity, 1);

    let for_bob = mk.notifications().for_seller(&bob.uid).expect("derivation");
    assert_eq!(for_bob.len(), 1);
    assert_eq!(
        for_bob.first().map(|n| n.product_title.clone()),
        Some("Oak Bookshelf".to_owned())
    );
}

#[test]
fn multi_seller_order_reports_order_total_to_each_seller() {
    let mk = marketplace();
    let alice = sign_up(&mk, "alice", "alice@example.com");
    let bob = sign_up(&mk, "bob", "bob@example.com");
    let carol = sign_up(&mk, "carol", "carol@example.com");

    // One order containing both sellers' items:
    // Electronics at 120 (25) + Furniture at 80 (20) = 45
    let camera = list_product(&mk, &alice, "Vintage Camera", Category::Electronics, 120);
    let shelf = list_product(&mk, &bob, "Oak Bookshelf", Category::Furniture, 80);

    mk.cart().add(&carol.uid, &camera.id).expect("add");
    mk.cart().add(&carol.uid, &shelf.id).expect("add");
    let outcome = mk
        .checkout()
        .checkout(&carol, checkout_request(&carol))
        .expect("checkout");
    assert_eq!(outcome.order_impact.total_contribution, 45);

    // Both sellers see the whole order's 45, not their line's share
    let for_alice = mk
        .notifications()
        .for_seller(&alice.uid)
        .expect("derivation");
    let for_bob = mk.notifications().for_seller(&bob.uid).expect("derivation");

    assert_eq!(
        for_alice.first().map(|n| n.sustainability_contribution),
        Some(45)
    );
    assert_eq!(
        for_bob.first().map(|n| n.sustainability_contribution),
        Some(45)
    );
}

#[test]
fn notifications_span_all_buyers() {
    let mk = marketplace();
    let seller = sign_up(&mk, "alice", "alice@example.com");
    let ada = sign_up(&mk, "ada", "ada@example.com");
    let ben = sign_up(&mk, "ben", "ben@example.com");

    let first = list_product(&mk, &seller, "First Item", Category::Clothing, 30);
    let second = list_product(&mk, &seller, "Second Item", Category::Clothing, 30);

    let _ = buy(&mk, &ada, &first);
    let _ = buy(&mk, &ben, &second);

    let notifications = mk
        .notifications()
        .for_seller(&seller.uid)
        .expect("derivation");
    assert_eq!(notifications.len(), 2);

    let mut buyers: Vec<String> = notifications.iter().map(|n| n.buyer_name.clone()).collect();
    buyers.sort();
    assert_eq!(buyers, vec!["ada".to_owned(), "ben".to_owned()]);
}
