//! Persisted entity shapes and their typed patch structs.
//!
//! Every entity serializes with camelCase field names, matching the
//! document format the marketplace has always stored. Updates go through
//! the per-entity patch structs (named optional fields) rather than
//! free-form merges, so an update can never inject unknown fields.

pub mod cart;
pub mod notification;
pub mod product;
pub mod purchase;
pub mod user;

pub use cart::CartItem;
pub use notification::SellerNotification;
pub use product::{NewProduct, Product, ProductPatch};
pub use purchase::{Purchase, PurchaseDraft, PurchaseLine, ShippingAddress};
pub use user::{User, UserPatch};
