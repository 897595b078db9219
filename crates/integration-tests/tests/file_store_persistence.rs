//! Durability scenarios over the JSON file backend.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ecofinds_core::Category;
use ecofinds_integration_tests::{buy, list_product, sign_up};
use ecofinds_marketplace::store::JsonFileStore;
use ecofinds_marketplace::{Marketplace, MarketplaceConfig};

fn temp_data_file(label: &str) -> PathBuf {
    let unique = ecofinds_core::types::id::generate_raw(label);
    std::env::temp_dir().join(format!("ecofinds-it-{unique}.json"))
}

fn file_marketplace(path: &Path) -> Marketplace {
    Marketplace::new(
        MarketplaceConfig::default(),
        Arc::new(JsonFileStore::open(path)),
    )
}

#[test]
fn state_survives_reopening_the_store() {
    let path = temp_data_file("reopen");

    {
        let mk = file_marketplace(&path);
        let seller = sign_up(&mk, "collector", "collector@example.com");
        let buyer = sign_up(&mk, "ada", "ada@example.com");
        let camera = list_product(&mk, &seller, "Vintage Camera", Category::Electronics, 120);
        let _ = buy(&mk, &buyer, &camera);
    }

    // A fresh marketplace over the same file sees everything
    let reopened = file_marketplace(&path);
    assert_eq!(reopened.users().all().len(), 2);
    assert_eq!(reopened.products().all().len(), 1);

    let buyer = reopened
        .users()
        .all()
        .into_iter()
        .find(|u| u.username == "ada")
        .expect("buyer persisted");
    assert_eq!(buyer.sustainability_score, 25);
    assert_eq!(reopened.purchases().history(&buyer.uid).len(), 1);

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn corrupt_data_file_starts_empty_instead_of_failing() {
    let path = temp_data_file("corrupt");
    std::fs::write(&path, "this is not a json document").expect("write garbage");

    let mk = file_marketplace(&path);
    assert!(mk.users().all().is_empty());

    // The store still works; writes replace the bad document
    let _ = sign_up(&mk, "ada", "ada@example.com");
    assert_eq!(mk.users().all().len(), 1);

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn corrupt_single_collection_fails_closed() {
    let path = temp_data_file("partial");

    let mk = file_marketplace(&path);
    let seller = sign_up(&mk, "collector", "collector@example.com");
    let _ = list_product(&mk, &seller, "Vintage Camera", Category::Electronics, 120);

    // Corrupt just the products collection in place
    mk.backend()
        .set("ecofinds_products", "[{broken")
        .expect("overwrite");

    // Products read as empty; users are untouched
    assert!(mk.products().all().is_empty());
    assert_eq!(mk.users().all().len(), 1);

    std::fs::remove_file(&path).expect("cleanup");
}
