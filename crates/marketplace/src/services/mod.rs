//! Marketplace services.
//!
//! - [`sustainability`] - Pure scoring engine (no storage access)
//! - [`catalog`] - Listing CRUD and availability filtering
//! - [`cart`] - Cart mutation and resolved cart views
//! - [`checkout`] - The composite purchase flow
//! - [`notifications`] - Derived seller sale notifications
//! - [`accounts`] - Sign-up, create-or-login, profile updates

pub mod accounts;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod notifications;
pub mod sustainability;

pub use accounts::{AccountError, AccountService};
pub use cart::CartService;
pub use catalog::{CatalogService, ListingError};
pub use checkout::{CheckoutError, CheckoutOutcome, CheckoutRequest, CheckoutService};
pub use notifications::NotificationService;
