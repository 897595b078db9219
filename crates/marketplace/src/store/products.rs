//! Product repository.

use chrono::Utc;

use ecofinds_core::{ProductId, UserId};

use super::{StorageBackend, StoreError, products_key, read_collection, write_collection};
use crate::models::{NewProduct, Product, ProductPatch, User};

/// Repository for product listings.
pub struct ProductRepository<'a> {
    backend: &'a dyn StorageBackend,
    namespace: &'a str,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend, namespace: &'a str) -> Self {
        Self { backend, namespace }
    }

    fn key(&self) -> String {
        products_key(self.namespace)
    }

    /// All products, in insertion order. Never fails: missing or corrupt
    /// data reads as empty.
    #[must_use]
    pub fn all(&self) -> Vec<Product> {
        read_collection(self.backend, &self.key())
    }

    /// Replace the whole products collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the backend write fails.
    pub fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        write_collection(self.backend, &self.key(), products)
    }

    /// Whether the products collection has ever been written.
    ///
    /// Distinguishes "no data yet" from "explicitly saved as empty"; the
    /// demo seed runs only in the former case.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend read fails.
    pub fn is_unwritten(&self) -> Result<bool, StoreError> {
        Ok(self.backend.get(&self.key())?.is_none())
    }

    /// Append a new listing for a seller and return it.
    ///
    /// The listing starts available, with fresh ID and timestamps and the
    /// seller's identity denormalized onto it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn add(&self, seller: &User, new: NewProduct) -> Result<Product, StoreError> {
        let mut products = self.all();
        let now = Utc::now();

        let product = Product {
            id: ProductId::generate(),
            title: new.title,
            description: new.description,
            category: new.category,
            price: new.price,
            image_url: new.image_url,
            seller_id: seller.uid.clone(),
            seller_name: seller.username.clone(),
            condition: new.condition,
            location: new.location,
            is_available: true,
            buyer_id: None,
            sold_at: None,
            created_at: now,
            updated_at: now,
        };

        products.push(product.clone());
        self.save(&products)?;

        Ok(product)
    }

    /// Get a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.all().into_iter().find(|p| &p.id == id)
    }

    /// All products listed by a seller, sold or not.
    #[must_use]
    pub fn by_seller(&self, seller_id: &UserId) -> Vec<Product> {
        self.all()
            .into_iter()
            .filter(|p| &p.seller_id == seller_id)
            .collect()
    }

    /// Products that can currently be bought.
    #[must_use]
    pub fn available(&self) -> Vec<Product> {
        self.all().into_iter().filter(|p| p.is_available).collect()
    }

    /// Apply a listing patch and refresh `updated_at`.
    ///
    /// Returns `Ok(None)` if no product has the given ID; callers decide
    /// whether to ignore or escalate.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn update(&self, id: &ProductId, patch: ProductPatch) -> Result<Option<Product>, StoreError> {
        let mut products = self.all();

        let Some(product) = products.iter_mut().find(|p| &p.id == id) else {
            return Ok(None);
        };

        product.apply(patch);
        product.updated_at = Utc::now();
        let updated = product.clone();
        self.save(&products)?;

        Ok(Some(updated))
    }

    /// Flip a product to sold: unavailable, with buyer and sale time set.
    ///
    /// Returns `Ok(None)` if no product has the given ID (e.g., the seller
    /// deleted the listing while it sat in a cart).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn mark_sold(
        &self,
        id: &ProductId,
        buyer_id: &UserId,
    ) -> Result<Option<Product>, StoreError> {
        let mut products = self.all();

        let Some(product) = products.iter_mut().find(|p| &p.id == id) else {
            return Ok(None);
        };

        let now = Utc::now();
        product.is_available = false;
        product.buyer_id = Some(buyer_id.clone());
        product.sold_at = Some(now);
        product.updated_at = now;
        let updated = product.clone();
        self.save(&products)?;

        Ok(Some(updated))
    }

    /// Remove a product. Removing a missing ID is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        let mut products = self.all();
        products.retain(|p| &p.id != id);
        self.save(&products)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ecofinds_core::{Category, Email, Price, SustainabilityLevel};
    use rust_decimal::Decimal;

    use super::*;
    use crate::store::MemoryStore;

    fn seller() -> User {
        User {
            uid: UserId::new("user_1_seller"),
            username: "Camera Collector".to_owned(),
            email: Email::parse("collector@example.com").unwrap(),
            created_at: Utc::now(),
            profile_image: None,
            location: String::new(),
            bio: String::new(),
            sustainability_score: 0,
            sustainability_level: SustainabilityLevel::Beginner,
            total_items_purchased: 0,
            last_updated: None,
        }
    }

    fn camera() -> NewProduct {
        NewProduct {
            title: "Vintage Camera".to_owned(),
            description: "Works great".to_owned(),
            category: Category::Electronics,
            price: Price::usd(Decimal::from(120)),
            ..NewProduct::default()
        }
    }

    #[test]
    fn test_add_sets_fresh_listing_state() {
        let backend = MemoryStore::new();
        let repo = ProductRepository::new(&backend, "ecofinds");

        let product = repo.add(&seller(), camera()).unwrap();
        assert!(product.id.as_str().starts_with("prod_"));
        assert!(product.is_available);
        assert!(product.buyer_id.is_none());
        assert!(product.sold_at.is_none());
        assert_eq!(product.seller_name, "Camera Collector");
    }

    #[test]
    fn test_available_excludes_sold() {
        let backend = MemoryStore::new();
        let repo = ProductRepository::new(&backend, "ecofinds");
        let seller = seller();

        let kept = repo.add(&seller, camera()).unwrap();
        let sold = repo.add(&seller, camera()).unwrap();
        repo.mark_sold(&sold.id, &UserId::new("user_2_buyer"))
            .unwrap()
            .unwrap();

        let available = repo.available();
        assert_eq!(available.len(), 1);
        assert_eq!(available.first().map(|p| p.id.clone()), Some(kept.id));
    }

    #[test]
    fn test_mark_sold_sets_buyer_and_time() {
        let backend = MemoryStore::new();
        let repo = ProductRepository::new(&backend, "ecofinds");

        let product = repo.add(&seller(), camera()).unwrap();
        let buyer = UserId::new("user_2_buyer");
        let sold = repo.mark_sold(&product.id, &buyer).unwrap().unwrap();

        assert!(sold.is_sold());
        assert_eq!(sold.buyer_id.as_ref(), Some(&buyer));
        assert!(sold.sold_at.is_some());
    }

    #[test]
    fn test_mark_sold_missing_is_none() {
        let backend = MemoryStore::new();
        let repo = ProductRepository::new(&backend, "ecofinds");

        let result = repo
            .mark_sold(&ProductId::new("prod_0_gone"), &UserId::new("user_2_b"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let backend = MemoryStore::new();
        let repo = ProductRepository::new(&backend, "ecofinds");

        let product = repo.add(&seller(), camera()).unwrap();
        repo.delete(&ProductId::new("prod_0_gone")).unwrap();
        assert_eq!(repo.all().len(), 1);

        repo.delete(&product.id).unwrap();
        assert!(repo.all().is_empty());
    }

    #[test]
    fn test_is_unwritten_tracks_first_save() {
        let backend = MemoryStore::new();
        let repo = ProductRepository::new(&backend, "ecofinds");

        assert!(repo.is_unwritten().unwrap());
        repo.save(&[]).unwrap();
        assert!(!repo.is_unwritten().unwrap());
    }
}
