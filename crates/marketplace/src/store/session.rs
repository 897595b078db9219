//! Current-user session marker.
//!
//! The marketplace keeps one serialized user record under
//! `<ns>_current_user` as its session state. A corrupt marker reads as
//! "nobody signed in" rather than erroring.

use super::{StorageBackend, StoreError, current_user_key};
use crate::models::User;

/// Accessor for the session marker.
pub struct SessionStore<'a> {
    backend: &'a dyn StorageBackend,
    namespace: &'a str,
}

impl<'a> SessionStore<'a> {
    /// Create a new session store.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend, namespace: &'a str) -> Self {
        Self { backend, namespace }
    }

    fn key(&self) -> String {
        current_user_key(self.namespace)
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current(&self) -> Option<User> {
        let raw = match self.backend.get(&self.key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "session read failed, treating as signed out");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "corrupt session marker, treating as signed out");
                None
            }
        }
    }

    /// Mark a user as signed in.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the backend write fails.
    pub fn set_current(&self, user: &User) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        self.backend.set(&self.key(), &raw)
    }

    /// Clear the session marker.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend write fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(&self.key())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use ecofinds_core::{Email, SustainabilityLevel, UserId};

    use super::*;
    use crate::store::MemoryStore;

    fn user() -> User {
        User {
            uid: UserId::new("user_1_ada"),
            username: "ada".to_owned(),
            email: Email::parse("ada@example.com").unwrap(),
            created_at: Utc::now(),
            profile_image: None,
            location: String::new(),
            bio: String::new(),
            sustainability_score: 0,
            sustainability_level: SustainabilityLevel::Beginner,
            total_items_purchased: 0,
            last_updated: None,
        }
    }

    #[test]
    fn test_set_current_then_read_back() {
        let backend = MemoryStore::new();
        let session = SessionStore::new(&backend, "ecofinds");

        assert!(session.current().is_none());
        session.set_current(&user()).unwrap();
        assert_eq!(session.current().map(|u| u.uid), Some(user().uid));
    }

    #[test]
    fn test_clear_signs_out() {
        let backend = MemoryStore::new();
        let session = SessionStore::new(&backend, "ecofinds");

        session.set_current(&user()).unwrap();
        session.clear().unwrap();
        assert!(session.current().is_none());
    }

    #[test]
    fn test_corrupt_marker_reads_as_signed_out() {
        let backend = MemoryStore::new();
        backend.set("ecofinds_current_user", "]]garbage").unwrap();

        let session = SessionStore::new(&backend, "ecofinds");
        assert!(session.current().is_none());
    }
}
