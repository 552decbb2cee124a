//! Route table and the access decision behind `ProtectedRoute`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/login` and `/register` are public, `/dashboard` needs a session, and
//! `/admin` additionally needs `ROLE_ADMIN`. A role mismatch redirects to the
//! dashboard instead of showing an error page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::auth::AuthState;

/// Client-side routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    Dashboard,
    Admin,
}

impl AppRoute {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Admin => "/admin",
        }
    }
}

/// Outcome of gating a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth work is in flight; show a placeholder only.
    Pending,
    /// Navigate away instead of rendering.
    RedirectTo(AppRoute),
    /// Render the protected content.
    Allowed,
}

/// Decide what a protected view renders for `state`.
///
/// An empty `required_roles` admits any signed-in user.
#[must_use]
pub fn evaluate<R: AsRef<str>>(state: &AuthState, required_roles: &[R]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    if !state.is_authenticated() {
        return GuardDecision::RedirectTo(AppRoute::Login);
    }
    if !required_roles.is_empty() && !state.has_any_role(required_roles) {
        return GuardDecision::RedirectTo(AppRoute::Dashboard);
    }
    GuardDecision::Allowed
}
