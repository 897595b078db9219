//! User repository.

use chrono::Utc;

use ecofinds_core::{Email, SustainabilityLevel, UserId};

use super::{StorageBackend, StoreError, read_collection, users_key, write_collection};
use crate::models::{User, UserPatch};
use crate::services::sustainability::LifetimeImpact;

/// Repository for user records.
pub struct UserRepository<'a> {
    backend: &'a dyn StorageBackend,
    namespace: &'a str,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend, namespace: &'a str) -> Self {
        Self { backend, namespace }
    }

    fn key(&self) -> String {
        users_key(self.namespace)
    }

    /// All users, in insertion order. Never fails: missing or corrupt data
    /// reads as empty.
    #[must_use]
    pub fn all(&self) -> Vec<User> {
        read_collection(self.backend, &self.key())
    }

    /// Replace the whole users collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the backend write fails.
    pub fn save(&self, users: &[User]) -> Result<(), StoreError> {
        write_collection(self.backend, &self.key(), users)
    }

    /// Create a user with a fresh ID, enforcing email uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if a user with the same email already
    /// exists, or `StoreError` if persisting fails.
    pub fn create(&self, username: &str, email: Email) -> Result<User, StoreError> {
        let mut users = self.all();

        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::Conflict("email already exists".to_owned()));
        }

        let user = User {
            uid: UserId::generate(),
            username: username.to_owned(),
            email,
            created_at: Utc::now(),
            profile_image: None,
            location: String::new(),
            bio: String::new(),
            sustainability_score: 0,
            sustainability_level: SustainabilityLevel::Beginner,
            total_items_purchased: 0,
            last_updated: None,
        };

        users.push(user.clone());
        self.save(&users)?;

        Ok(user)
    }

    /// Get a user by ID.
    #[must_use]
    pub fn get(&self, uid: &UserId) -> Option<User> {
        self.all().into_iter().find(|u| &u.uid == uid)
    }

    /// Get a user by email address.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<User> {
        self.all().into_iter().find(|u| &u.email == email)
    }

    /// Apply a profile patch to a user.
    ///
    /// Returns `Ok(None)` if no user has the given ID; callers decide
    /// whether to ignore or escalate.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn update(&self, uid: &UserId, patch: UserPatch) -> Result<Option<User>, StoreError> {
        let mut users = self.all();

        let Some(user) = users.iter_mut().find(|u| &u.uid == uid) else {
            return Ok(None);
        };

        user.apply(patch);
        let updated = user.clone();
        self.save(&users)?;

        Ok(Some(updated))
    }

    /// Write recomputed lifetime sustainability onto a user and stamp
    /// `last_updated`.
    ///
    /// Returns `Ok(None)` if no user has the given ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn record_sustainability(
        &self,
        uid: &UserId,
        lifetime: &LifetimeImpact,
    ) -> Result<Option<User>, StoreError> {
        let mut users = self.all();

        let Some(user) = users.iter_mut().find(|u| &u.uid == uid) else {
            return Ok(None);
        };

        user.sustainability_score = lifetime.total_contribution;
        user.sustainability_level = lifetime.level;
        user.total_items_purchased = lifetime.total_items;
        user.last_updated = Some(Utc::now());
        let updated = user.clone();
        self.save(&users)?;

        Ok(Some(updated))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn test_create_and_get() {
        let backend = MemoryStore::new();
        let repo = UserRepository::new(&backend, "ecofinds");

        let user = repo.create("ada", email("ada@example.com")).unwrap();
        assert!(user.uid.as_str().starts_with("user_"));
        assert_eq!(user.sustainability_level, SustainabilityLevel::Beginner);

        let fetched = repo.get(&user.uid).unwrap();
        assert_eq!(fetched, user);
    }

    #[test]
    fn test_duplicate_email_is_conflict() {
        let backend = MemoryStore::new();
        let repo = UserRepository::new(&backend, "ecofinds");

        repo.create("ada", email("ada@example.com")).unwrap();
        let err = repo.create("imposter", email("ada@example.com"));
        assert!(matches!(err, Err(StoreError::Conflict(_))));
    }

    #[test]
    fn test_update_missing_user_is_none() {
        let backend = MemoryStore::new();
        let repo = UserRepository::new(&backend, "ecofinds");

        let result = repo
            .update(&UserId::new("user_0_missing"), UserPatch::default())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_update_patches_profile() {
        let backend = MemoryStore::new();
        let repo = UserRepository::new(&backend, "ecofinds");

        let user = repo.create("ada", email("ada@example.com")).unwrap();
        let updated = repo
            .update(
                &user.uid,
                UserPatch {
                    location: Some("London".to_owned()),
                    ..UserPatch::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.location, "London");
        assert_eq!(repo.get(&user.uid).unwrap().location, "London");
    }
}
