//! The persisted auth flag.
//!
//! A simulated login: one JSON document under a well-known key, no server
//! verification of any kind. The store is handed to handlers through
//! `AppState`, so tests construct an `AuthStore` over a temp directory and
//! get deterministic fixtures instead of poking an ambient singleton.

use tracing::instrument;

use sole_street_core::{AuthState, UserProfile};

use crate::storage::{LocalStore, StorageError};

/// Storage key for the persisted auth state.
pub const AUTH_STORAGE_KEY: &str = "footwear-auth";

/// Read/write access to the persisted auth flag.
#[derive(Debug, Clone)]
pub struct AuthStore {
    store: LocalStore,
}

impl AuthStore {
    /// Wrap a [`LocalStore`].
    #[must_use]
    pub const fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// The current auth state. Missing or malformed state resolves to
    /// logged-out, never to an error.
    #[must_use]
    pub fn current(&self) -> AuthState {
        self.store.get(AUTH_STORAGE_KEY).unwrap_or_default()
    }

    /// Whether a user is currently logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current().is_authenticated
    }

    /// Persist a logged-in state for `user`.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the state fails.
    #[instrument(skip(self), fields(email = %user.email))]
    pub fn login(&self, user: UserProfile) -> Result<AuthState, StorageError> {
        let state = AuthState::logged_in(user);
        self.store.set(AUTH_STORAGE_KEY, &state)?;
        Ok(state)
    }

    /// Clear the persisted auth state.
    ///
    /// # Errors
    ///
    /// Returns an error if removing the state fails.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<(), StorageError> {
        self.store.remove(AUTH_STORAGE_KEY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn auth() -> (tempfile::TempDir, AuthStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, AuthStore::new(store))
    }

    #[test]
    fn test_default_is_logged_out() {
        let (_dir, auth) = auth();
        assert!(!auth.is_authenticated());
        assert!(auth.current().user.is_none());
    }

    #[test]
    fn test_login_logout_cycle() {
        let (_dir, auth) = auth();

        let state = auth.login(UserProfile::new("Ada", "ada@example.com")).unwrap();
        assert!(state.is_authenticated);
        assert!(auth.is_authenticated());
        assert_eq!(auth.current().user.unwrap().name, "Ada");

        auth.logout().unwrap();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_malformed_state_resolves_to_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("footwear-auth.json"), "{broken").unwrap();

        let auth = AuthStore::new(store);
        assert!(!auth.is_authenticated());
    }
}
