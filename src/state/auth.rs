//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware pages to coordinate login redirects
//! and identity-dependent rendering. Transitions live here as plain methods;
//! `AuthProvider` applies them to the shared signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the session, in-flight work, and the last
/// user-facing error.
///
/// `error` and `loading` are never both set by the transitions below.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// State for a stored session. Anything short of a complete token + user
    /// pair starts signed out.
    #[must_use]
    pub fn restored(token: Option<String>, user: Option<User>) -> Self {
        match (token, user) {
            (Some(token), Some(user)) => Self { user: Some(user), token: Some(token), ..Self::default() },
            _ => Self::default(),
        }
    }

    /// Signed in iff both halves of the session are present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Adopt a fresh session, clearing loading and error.
    pub fn login(&mut self, token: String, user: User) {
        *self = Self { user: Some(user), token: Some(token), loading: false, error: None };
    }

    /// Return to the signed-out state.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Record (or clear) the surfaced error; always ends any loading phase.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
        self.loading = false;
    }

    /// Whether the signed-in user carries at least one of `roles`.
    #[must_use]
    pub fn has_any_role<R: AsRef<str>>(&self, roles: &[R]) -> bool {
        self.user.as_ref().is_some_and(|u| u.has_any_role(roles))
    }
}
