//! Session/auth state as persisted under the auth storage key.
//!
//! This is a simulated login: a flag plus a profile, with no server-side
//! verification. Handlers receive it explicitly through application state
//! rather than reading an ambient singleton, so tests can supply fixtures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile of the (simulated) logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Create a profile with a fresh random id.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            avatar_url: None,
        }
    }
}

/// The persisted auth flag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
}

impl AuthState {
    /// A logged-in state for the given profile.
    #[must_use]
    pub const fn logged_in(user: UserProfile) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }

    /// The logged-out default.
    #[must_use]
    pub const fn logged_out() -> Self {
        Self {
            is_authenticated: false,
            user: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_default_is_logged_out() {
        let state = AuthState::default();
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_auth_state_wire_format() {
        let state = AuthState::logged_out();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"isAuthenticated":false,"user":null}"#);

        let profile = UserProfile::new("Ada", "ada@example.com");
        let state = AuthState::logged_in(profile.clone());
        let back: AuthState = serde_json::from_str(&serde_json::to_string(&state).unwrap()).unwrap();
        assert!(back.is_authenticated);
        assert_eq!(back.user.unwrap().email, "ada@example.com");
    }
}
