//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Every ID carries a
//! kind prefix (`user_`, `prod_`, ...) so a raw value read back from storage
//! is self-describing.

use rand::seq::IndexedRandom;

/// Length of the random suffix in a generated ID.
const SUFFIX_LEN: usize = 9;

/// Alphabet for the random suffix (base-36, lowercase).
const SUFFIX_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a raw ID string: `<prefix>_<unix-millis>_<random suffix>`.
///
/// Unique in practice within a running session: the millisecond component is
/// monotonic across calls and the random suffix carries 36^9 possibilities
/// within a single millisecond.
#[must_use]
pub fn generate_raw(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .filter_map(|_| SUFFIX_CHARS.choose(&mut rng).copied())
        .map(char::from)
        .collect();
    format!("{prefix}_{millis}_{suffix}")
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - A kind prefix used by `generate()`
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use ecofinds_core::{ProductId, UserId};
/// let user_id = UserId::generate();
/// let product_id = ProductId::generate();
///
/// assert!(user_id.as_str().starts_with("user_"));
/// assert!(product_id.as_str().starts_with("prod_"));
///
/// // These are different types, so this won't compile:
/// // let _: UserId = product_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Kind prefix prepended to every generated ID of this type.
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh ID: `<prefix>_<unix-millis>_<random suffix>`.
            #[must_use]
            pub fn generate() -> Self {
                Self($crate::types::id::generate_raw($prefix))
            }

            /// Wrap an existing ID value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId, "user");
define_id!(ProductId, "prod");
define_id!(CartItemId, "cart");
define_id!(PurchaseId, "purchase");
define_id!(NotificationId, "notif");
