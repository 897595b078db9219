//! Cart repository.
//!
//! Carts are stored per user under `<ns>_cart_<userId>`, so one user's
//! cart can never leak into another's.

use ecofinds_core::{CartItemId, ProductId, UserId};

use super::{StorageBackend, StoreError, cart_key, read_collection, write_collection};
use crate::models::CartItem;

/// Repository for per-user carts.
pub struct CartRepository<'a> {
    backend: &'a dyn StorageBackend,
    namespace: &'a str,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend, namespace: &'a str) -> Self {
        Self { backend, namespace }
    }

    fn key(&self, user_id: &UserId) -> String {
        cart_key(self.namespace, user_id)
    }

    /// A user's cart, in insertion order. Never fails: missing or corrupt
    /// data reads as empty.
    #[must_use]
    pub fn items(&self, user_id: &UserId) -> Vec<CartItem> {
        read_collection(self.backend, &self.key(user_id))
    }

    /// Replace a user's whole cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the backend write fails.
    pub fn save(&self, user_id: &UserId, items: &[CartItem]) -> Result<(), StoreError> {
        write_collection(self.backend, &self.key(user_id), items)
    }

    /// Add one unit of a product to a user's cart.
    ///
    /// If the product is already in the cart its line's quantity is
    /// incremented; otherwise a fresh single-unit line is appended.
    /// Returns the updated cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn add(&self, user_id: &UserId, product_id: &ProductId) -> Result<Vec<CartItem>, StoreError> {
        let mut items = self.items(user_id);

        if let Some(existing) = items.iter_mut().find(|i| &i.product_id == product_id) {
            existing.quantity += 1;
        } else {
            items.push(CartItem::new(product_id.clone()));
        }

        self.save(user_id, &items)?;
        Ok(items)
    }

    /// Remove a cart line by its ID. Removing a missing ID leaves the cart
    /// unchanged. Returns the updated cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn remove(
        &self,
        user_id: &UserId,
        cart_item_id: &CartItemId,
    ) -> Result<Vec<CartItem>, StoreError> {
        let mut items = self.items(user_id);
        items.retain(|i| &i.id != cart_item_id);
        self.save(user_id, &items)?;
        Ok(items)
    }

    /// Empty a user's cart. Returns the (empty) cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn clear(&self, user_id: &UserId) -> Result<Vec<CartItem>, StoreError> {
        self.save(user_id, &[])?;
        Ok(Vec::new())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_add_twice_merges_into_one_line() {
        let backend = MemoryStore::new();
        let repo = CartRepository::new(&backend, "ecofinds");
        let user = UserId::new("user_1_a");
        let product = ProductId::new("prod_1_a");

        repo.add(&user, &product).unwrap();
        let items = repo.add(&user, &product).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items.first().map(|i| i.quantity), Some(2));
    }

    #[test]
    fn test_remove_unknown_id_leaves_cart_unchanged() {
        let backend = MemoryStore::new();
        let repo = CartRepository::new(&backend, "ecofinds");
        let user = UserId::new("user_1_a");

        repo.add(&user, &ProductId::new("prod_1_a")).unwrap();
        let before = repo.items(&user);

        let after = repo.remove(&user, &CartItemId::new("cart_0_gone")).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_remove_by_line_id() {
        let backend = MemoryStore::new();
        let repo = CartRepository::new(&backend, "ecofinds");
        let user = UserId::new("user_1_a");

        repo.add(&user, &ProductId::new("prod_1_a")).unwrap();
        let items = repo.add(&user, &ProductId::new("prod_2_b")).unwrap();
        let first_id = items.first().map(|i| i.id.clone()).unwrap();

        let after = repo.remove(&user, &first_id).unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(
            after.first().map(|i| i.product_id.clone()),
            Some(ProductId::new("prod_2_b"))
        );
    }

    #[test]
    fn test_clear_empties_cart() {
        let backend = MemoryStore::new();
        let repo = CartRepository::new(&backend, "ecofinds");
        let user = UserId::new("user_1_a");

        repo.add(&user, &ProductId::new("prod_1_a")).unwrap();
        let cleared = repo.clear(&user).unwrap();

        assert!(cleared.is_empty());
        assert!(repo.items(&user).is_empty());
    }

    #[test]
    fn test_carts_are_namespaced_per_user() {
        let backend = MemoryStore::new();
        let repo = CartRepository::new(&backend, "ecofinds");
        let ada = UserId::new("user_1_ada");
        let ben = UserId::new("user_2_ben");

        repo.add(&ada, &ProductId::new("prod_1_a")).unwrap();

        assert_eq!(repo.items(&ada).len(), 1);
        assert!(repo.items(&ben).is_empty());
    }
}
