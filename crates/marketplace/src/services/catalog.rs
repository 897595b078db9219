//! Listing catalog operations.

use thiserror::Error;

use ecofinds_core::{ProductId, UserId};

use crate::models::{NewProduct, Product, ProductPatch, User};
use crate::store::{ProductRepository, StorageBackend, StoreError};

/// Errors that can occur during listing operations.
#[derive(Debug, Error)]
pub enum ListingError {
    /// A required listing field is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The asking price is negative.
    #[error("price must not be negative")]
    NegativePrice,

    /// No listing with the given ID exists.
    #[error("listing not found")]
    NotFound,

    /// The caller does not own the listing.
    #[error("only the seller can modify this listing")]
    NotOwner,

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Catalog service: listing CRUD and availability views.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend, namespace: &'a str) -> Self {
        Self {
            products: ProductRepository::new(backend, namespace),
        }
    }

    /// Products that can currently be bought.
    #[must_use]
    pub fn available_products(&self) -> Vec<Product> {
        self.products.available()
    }

    /// Look up a single product.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.products.get(id)
    }

    /// Everything a seller has listed, sold or not.
    #[must_use]
    pub fn listings_by_seller(&self, seller_id: &UserId) -> Vec<Product> {
        self.products.by_seller(seller_id)
    }

    /// Create a listing for a seller.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::MissingField` if the title or description is
    /// empty, `ListingError::NegativePrice` for a negative price, or a
    /// storage error if persisting fails.
    pub fn create_listing(&self, seller: &User, new: NewProduct) -> Result<Product, ListingError> {
        validate_listing_fields(&new.title, &new.description)?;
        if new.price.amount.is_sign_negative() {
            return Err(ListingError::NegativePrice);
        }

        let product = self.products.add(seller, new)?;
        tracing::info!(product_id = %product.id, seller_id = %product.seller_id, "listing created");
        Ok(product)
    }

    /// Edit a listing the caller owns.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::NotFound` if the listing does not exist,
    /// `ListingError::NotOwner` if the caller is not its seller, field
    /// validation errors as for creation, or a storage error.
    pub fn edit_listing(
        &self,
        seller_id: &UserId,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Product, ListingError> {
        let existing = self.products.get(id).ok_or(ListingError::NotFound)?;
        if &existing.seller_id != seller_id {
            return Err(ListingError::NotOwner);
        }

        if let Some(title) = &patch.title
            && title.trim().is_empty()
        {
            return Err(ListingError::MissingField("title"));
        }
        if let Some(price) = &patch.price
            && price.amount.is_sign_negative()
        {
            return Err(ListingError::NegativePrice);
        }

        self.products
            .update(id, patch)?
            .ok_or(ListingError::NotFound)
    }

    /// Hard-delete a listing the caller owns.
    ///
    /// Deleting a listing that no longer exists is a no-op. Cart lines
    /// that still reference the deleted product are tolerated by the read
    /// paths, which skip lines they cannot resolve.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::NotOwner` if the caller is not the seller,
    /// or a storage error if persisting fails.
    pub fn delete_listing(&self, seller_id: &UserId, id: &ProductId) -> Result<(), ListingError> {
        let Some(existing) = self.products.get(id) else {
            return Ok(());
        };
        if &existing.seller_id != seller_id {
            return Err(ListingError::NotOwner);
        }

        self.products.delete(id)?;
        tracing::info!(product_id = %id, "listing deleted");
        Ok(())
    }
}

fn validate_listing_fields(title: &str, description: &str) -> Result<(), ListingError> {
    if title.trim().is_empty() {
        return Err(ListingError::MissingField("title"));
    }
    if description.trim().is_empty() {
        return Err(ListingError::MissingField("description"));
    }
    Ok(())
}
