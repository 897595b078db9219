//! EcoFinds Marketplace - Second-hand marketplace core.
//!
//! This crate implements the data and domain layer of the EcoFinds
//! sustainable marketplace: users list and browse second-hand products,
//! manage a cart, check out, and accumulate a gamified sustainability
//! score.
//!
//! # Architecture
//!
//! - [`store`] - Entity persistence over an injected [`store::StorageBackend`]
//!   (in-memory for tests, JSON file for durable demo data)
//! - [`models`] - Persisted entity shapes and their typed patch structs
//! - [`services`] - Catalog, cart, checkout, account, and notification
//!   operations, plus the pure sustainability engine
//! - [`export`] - Bulk data export document
//! - [`Marketplace`] - Facade owning the backend and handing out
//!   repositories and services
//!
//! All storage operations are synchronous and in-process. Checkout is a
//! multi-step sequence over independent storage writes, not a transaction;
//! callers that need atomicity must serialize access themselves.
//!
//! # Example
//!
//! ```
//! use ecofinds_marketplace::Marketplace;
//! use ecofinds_marketplace::models::NewProduct;
//! use ecofinds_core::{Category, Price};
//! use rust_decimal::Decimal;
//!
//! let marketplace = Marketplace::in_memory();
//! let seller = marketplace
//!     .accounts()
//!     .sign_up("ada", "ada@example.com")
//!     .expect("sign up");
//!
//! let listing = marketplace
//!     .catalog()
//!     .create_listing(
//!         &seller,
//!         NewProduct {
//!             title: "Vintage Camera".into(),
//!             description: "Works great".into(),
//!             category: Category::Electronics,
//!             price: Price::usd(Decimal::from(120)),
//!             ..NewProduct::default()
//!         },
//!     )
//!     .expect("create listing");
//!
//! assert!(listing.is_available);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod demo;
pub mod error;
pub mod export;
mod marketplace;
pub mod models;
pub mod services;
pub mod store;
pub mod telemetry;

pub use config::MarketplaceConfig;
pub use error::{MarketplaceError, Result};
pub use marketplace::Marketplace;
