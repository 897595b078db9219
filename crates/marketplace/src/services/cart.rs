//! Cart operations and resolved cart views.

use ecofinds_core::{CartItemId, CurrencyCode, Price, ProductId, UserId};

use crate::models::{CartItem, Product};
use crate::store::{CartRepository, ProductRepository, StorageBackend, StoreError};

/// A cart line joined with its product.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCartLine {
    pub item: CartItem,
    pub product: Product,
}

/// Cart service.
pub struct CartService<'a> {
    carts: CartRepository<'a>,
    products: ProductRepository<'a>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend, namespace: &'a str) -> Self {
        Self {
            carts: CartRepository::new(backend, namespace),
            products: ProductRepository::new(backend, namespace),
        }
    }

    /// A user's raw cart lines.
    #[must_use]
    pub fn items(&self, user_id: &UserId) -> Vec<CartItem> {
        self.carts.items(user_id)
    }

    /// A user's cart joined with product data.
    ///
    /// Lines whose product no longer exists (seller deleted the listing)
    /// are skipped, not errored.
    #[must_use]
    pub fn resolved(&self, user_id: &UserId) -> Vec<ResolvedCartLine> {
        self.carts
            .items(user_id)
            .into_iter()
            .filter_map(|item| {
                self.products
                    .get(&item.product_id)
                    .map(|product| ResolvedCartLine { item, product })
            })
            .collect()
    }

    /// Cart total: unit price times quantity, summed over resolvable lines.
    #[must_use]
    pub fn total(&self, user_id: &UserId) -> Price {
        let lines = self.resolved(user_id);
        let currency = lines
            .first()
            .map_or(CurrencyCode::USD, |l| l.product.price.currency_code);

        let amount = lines
            .iter()
            .map(|l| l.product.price.times(l.item.quantity).amount)
            .sum();

        Price::new(amount, currency)
    }

    /// Add one unit of a product; merges into an existing line if present.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn add(&self, user_id: &UserId, product_id: &ProductId) -> Result<Vec<CartItem>, StoreError> {
        self.carts.add(user_id, product_id)
    }

    /// Remove a line; unknown IDs are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn remove(
        &self,
        user_id: &UserId,
        cart_item_id: &CartItemId,
    ) -> Result<Vec<CartItem>, StoreError> {
        self.carts.remove(user_id, cart_item_id)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn clear(&self, user_id: &UserId) -> Result<Vec<CartItem>, StoreError> {
        self.carts.clear(user_id)
    }
}
