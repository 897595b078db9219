//! Account service: sign-up, create-or-login, and profile updates.
//!
//! The marketplace's authentication is deliberately trivial: no passwords,
//! no tokens, just a current-user marker in the store. Email uniqueness is
//! the only real constraint.

use thiserror::Error;

use ecofinds_core::{Email, EmailError, UserId};

use crate::models::{User, UserPatch};
use crate::store::{SessionStore, StorageBackend, StoreError, UserRepository};

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// A user with this email already exists.
    #[error("user with this email already exists")]
    EmailAlreadyExists,

    /// User not found.
    #[error("user not found")]
    UserNotFound,

    /// Username was patched to an empty string.
    #[error("username must not be empty")]
    EmptyUsername,

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Account service.
pub struct AccountService<'a> {
    users: UserRepository<'a>,
    session: SessionStore<'a>,
}

impl<'a> AccountService<'a> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend, namespace: &'a str) -> Self {
        Self {
            users: UserRepository::new(backend, namespace),
            session: SessionStore::new(backend, namespace),
        }
    }

    /// Register a new user and sign them in.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidEmail` if the email does not parse,
    /// `AccountError::EmailAlreadyExists` if the email is taken, or a
    /// storage error if persisting fails.
    pub fn sign_up(&self, username: &str, email: &str) -> Result<User, AccountError> {
        let email = Email::parse(email)?;

        let user = self.users.create(username, email).map_err(|e| match e {
            StoreError::Conflict(_) => AccountError::EmailAlreadyExists,
            other => AccountError::Store(other),
        })?;

        self.session.set_current(&user)?;
        tracing::info!(user_id = %user.uid, "user signed up");
        Ok(user)
    }

    /// Sign in by email, creating the account if it does not exist yet.
    ///
    /// A created account's username defaults to the email's local part.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidEmail` if the email does not parse,
    /// or a storage error if persisting fails.
    pub fn log_in(&self, email: &str) -> Result<User, AccountError> {
        let email = Email::parse(email)?;

        let user = match self.users.find_by_email(&email) {
            Some(user) => user,
            None => {
                let username = email.local_part().to_owned();
                self.users.create(&username, email)?
            }
        };

        self.session.set_current(&user)?;
        Ok(user)
    }

    /// Sign out.
    ///
    /// # Errors
    ///
    /// Returns a storage error if clearing the marker fails.
    pub fn log_out(&self) -> Result<(), AccountError> {
        self.session.clear()?;
        Ok(())
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.session.current()
    }

    /// Apply a profile patch to a user.
    ///
    /// Keeps the session marker in sync when the patched user is the one
    /// signed in.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::EmptyUsername` if the patch blanks the
    /// username, `AccountError::UserNotFound` if no user has the given ID,
    /// or a storage error if persisting fails.
    pub fn update_profile(&self, uid: &UserId, patch: UserPatch) -> Result<User, AccountError> {
        if let Some(username) = &patch.username
            && username.trim().is_empty()
        {
            return Err(AccountError::EmptyUsername);
        }

        let updated = self
            .users
            .update(uid, patch)?
            .ok_or(AccountError::UserNotFound)?;

        if self.session.current().is_some_and(|u| &u.uid == uid) {
            self.session.set_current(&updated)?;
        }

        Ok(updated)
    }
}
