//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecofinds_core::{Email, SustainabilityLevel, UserId};

/// A marketplace user.
///
/// Unique by `uid` and by `email` (enforced at creation). Users are never
/// hard-deleted; sustainability fields are recomputed from purchase history
/// after every checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub uid: UserId,
    /// Display name.
    pub username: String,
    /// User's email address.
    pub email: Email,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Optional avatar URL.
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Free-form location string.
    #[serde(default)]
    pub location: String,
    /// Free-form bio.
    #[serde(default)]
    pub bio: String,
    /// Lifetime sustainability contribution.
    #[serde(default)]
    pub sustainability_score: u32,
    /// Level derived from the lifetime contribution.
    #[serde(default)]
    pub sustainability_level: SustainabilityLevel,
    /// Total quantity of items purchased across all orders.
    #[serde(default)]
    pub total_items_purchased: u32,
    /// When the sustainability fields were last recomputed.
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl User {
    /// Apply a profile patch, updating only the fields it names.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(profile_image) = patch.profile_image {
            self.profile_image = Some(profile_image);
        }
    }
}

/// Named-field profile update.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}
