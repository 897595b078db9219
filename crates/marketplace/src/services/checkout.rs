//! The composite checkout flow.
//!
//! Checkout is a sequence of independent storage writes, not a
//! transaction: products are marked sold, the purchase record is
//! appended, the cart is cleared, and the buyer's lifetime score is
//! recomputed, in that order. A crash mid-sequence can leave a product
//! sold without a purchase record; callers that need atomicity must
//! layer it on top.

use thiserror::Error;

use ecofinds_core::{CurrencyCode, PaymentMethod, Price, PurchaseStatus};

use crate::models::{Product, Purchase, PurchaseDraft, PurchaseLine, ShippingAddress, User};
use crate::services::sustainability::{self, LifetimeImpact, OrderImpact};
use crate::store::{
    CartRepository, ProductRepository, PurchaseRepository, StorageBackend, StoreError,
    UserRepository,
};

/// Order contribution at or above this unlocks the achievement flow.
pub const ACHIEVEMENT_THRESHOLD: u32 = 50;

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A required shipping field is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The buyer's cart is empty.
    #[error("cart is empty")]
    EmptyCart,

    /// Every cart line referenced a product that no longer exists.
    #[error("no cart items are still available")]
    NothingToPurchase,

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Checkout form input.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub payment_method: PaymentMethod,
    pub shipping_address: ShippingAddress,
}

/// Everything checkout produced, for rendering confirmation and
/// achievement views.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    /// The stored purchase record.
    pub purchase: Purchase,
    /// This order's contribution details.
    pub order_impact: OrderImpact,
    /// The buyer's recomputed lifetime summary.
    pub lifetime: LifetimeImpact,
}

impl CheckoutOutcome {
    /// Whether this order crossed the achievement threshold.
    #[must_use]
    pub const fn achievement_unlocked(&self) -> bool {
        self.order_impact.total_contribution >= ACHIEVEMENT_THRESHOLD
    }
}

/// Checkout service.
pub struct CheckoutService<'a> {
    backend: &'a dyn StorageBackend,
    namespace: &'a str,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend, namespace: &'a str) -> Self {
        Self { backend, namespace }
    }

    /// Check out the buyer's cart.
    ///
    /// Cart lines whose product has been deleted are skipped. Each
    /// surviving line snapshots the product's sale-time fields into the
    /// purchase record so later edits or deletion of the listing never
    /// touch the history.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::MissingField` if a required shipping field
    /// is empty, `CheckoutError::EmptyCart` for an empty cart,
    /// `CheckoutError::NothingToPurchase` if no line resolves to an
    /// existing product, or a storage error if any write fails.
    pub fn checkout(
        &self,
        buyer: &User,
        request: CheckoutRequest,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        validate_shipping(&request.shipping_address)?;

        let carts = CartRepository::new(self.backend, self.namespace);
        let products = ProductRepository::new(self.backend, self.namespace);
        let purchases = PurchaseRepository::new(self.backend, self.namespace);
        let users = UserRepository::new(self.backend, self.namespace);

        let items = carts.items(&buyer.uid);
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        // Resolve products, skipping lines whose listing is gone
        let resolved: Vec<(u32, Product)> = items
            .iter()
            .filter_map(|item| {
                products
                    .get(&item.product_id)
                    .map(|product| (item.quantity, product))
            })
            .collect();

        if resolved.is_empty() {
            return Err(CheckoutError::NothingToPurchase);
        }

        let order_products: Vec<Product> = resolved.iter().map(|(_, p)| p.clone()).collect();
        let order_impact = sustainability::order_impact(&order_products);

        let lines: Vec<PurchaseLine> = resolved
            .iter()
            .map(|(quantity, product)| PurchaseLine {
                product_id: product.id.clone(),
                title: product.title.clone(),
                price: product.price,
                quantity: *quantity,
                seller_id: product.seller_id.clone(),
                seller_name: product.seller_name.clone(),
                category: product.category,
            })
            .collect();

        let total_amount = order_total(&resolved);

        for (_, product) in &resolved {
            products.mark_sold(&product.id, &buyer.uid)?;
        }

        let purchase = purchases.add(
            &buyer.uid,
            PurchaseDraft {
                products: lines,
                total_amount,
                payment_method: request.payment_method,
                shipping_address: request.shipping_address,
                sustainability_contribution: order_impact.total_contribution,
                sustainability_breakdown: order_impact.breakdown.clone(),
                status: PurchaseStatus::Completed,
            },
        )?;

        carts.clear(&buyer.uid)?;

        let history = purchases.history(&buyer.uid);
        let lifetime = sustainability::lifetime_impact(&history);
        users.record_sustainability(&buyer.uid, &lifetime)?;

        tracing::info!(
            buyer_id = %buyer.uid,
            purchase_id = %purchase.id,
            total = %purchase.total_amount.display(),
            contribution = order_impact.total_contribution,
            "checkout completed"
        );

        Ok(CheckoutOutcome {
            purchase,
            order_impact,
            lifetime,
        })
    }
}

fn order_total(resolved: &[(u32, Product)]) -> Price {
    let currency = resolved
        .first()
        .map_or(CurrencyCode::USD, |(_, p)| p.price.currency_code);

    let amount = resolved
        .iter()
        .map(|(quantity, product)| product.price.times(*quantity).amount)
        .sum();

    Price::new(amount, currency)
}

fn validate_shipping(address: &ShippingAddress) -> Result<(), CheckoutError> {
    if address.full_name.trim().is_empty() {
        return Err(CheckoutError::MissingField("full name"));
    }
    if address.email.trim().is_empty() {
        return Err(CheckoutError::MissingField("email"));
    }
    if address.address.trim().is_empty() {
        return Err(CheckoutError::MissingField("address"));
    }
    if address.city.trim().is_empty() {
        return Err(CheckoutError::MissingField("city"));
    }
    Ok(())
}
