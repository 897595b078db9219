//! Derived seller sale notifications.

use ecofinds_core::{NotificationId, UserId};

use crate::models::SellerNotification;
use crate::store::{ProductRepository, PurchaseRepository, StorageBackend, StoreError};

/// Notification service.
///
/// Notifications are never stored: every call re-scans the full purchase
/// history of every buyer and joins line items against current product
/// ownership. There is no cache and no `sellerId` index, which is fine at
/// demo scale but would need an index before scaling beyond it.
pub struct NotificationService<'a> {
    backend: &'a dyn StorageBackend,
    namespace: &'a str,
}

impl<'a> NotificationService<'a> {
    /// Create a new notification service.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend, namespace: &'a str) -> Self {
        Self { backend, namespace }
    }

    /// All sale notifications for a seller, most recent first.
    ///
    /// A line item matches when its product still exists and is owned by
    /// the requested seller. Each notification carries the whole order's
    /// sustainability contribution: a multi-seller order reports the same
    /// total to every seller in it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if purchase histories cannot be enumerated.
    pub fn for_seller(&self, seller_id: &UserId) -> Result<Vec<SellerNotification>, StoreError> {
        let products = ProductRepository::new(self.backend, self.namespace);
        let purchases = PurchaseRepository::new(self.backend, self.namespace);

        let mut notifications = Vec::new();

        for (_, history) in purchases.all_histories()? {
            for purchase in history {
                for line in &purchase.products {
                    let Some(product) = products.get(&line.product_id) else {
                        continue;
                    };
                    if &product.seller_id != seller_id {
                        continue;
                    }

                    notifications.push(SellerNotification {
                        id: NotificationId::generate(),
                        product_id: line.product_id.clone(),
                        product_title: product.title,
                        buyer_name: purchase.shipping_address.full_name.clone(),
                        buyer_email: purchase.shipping_address.email.clone(),
                        quantity: line.quantity,
                        price: line.price,
                        purchase_date: purchase.purchase_date,
                        sustainability_contribution: purchase.sustainability_contribution,
                    });
                }
            }
        }

        notifications.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date));
        Ok(notifications)
    }
}
