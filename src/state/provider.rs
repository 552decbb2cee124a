//! Application-lifetime auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs one [`AuthProvider`] at startup and hands it to the tree
//! through Leptos context. It owns the single authoritative `AuthState` signal
//! and the [`AuthService`]; pages and the route guard read the signal and call
//! the mutators here. The signal is disposed with the root reactive owner.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use leptos::prelude::*;

use super::auth::AuthState;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::auth::AuthService;
use crate::net::transport::{FetchTransport, HttpTransport};
use crate::net::types::User;
use crate::state::session::SessionStore;
use crate::util::storage::{BrowserStore, KeyValueStore};

/// Auth state signal plus the service that keeps storage in step with it.
#[derive(Clone, Debug)]
pub struct AuthProvider<T, S> {
    state: RwSignal<AuthState>,
    service: AuthService<T, S>,
}

/// Provider wired to browser fetch and `localStorage`.
pub type AppAuth = AuthProvider<FetchTransport, BrowserStore>;

impl<T: HttpTransport, S: KeyValueStore> AuthProvider<T, S> {
    /// Build the provider, rehydrating from the session store.
    pub fn new(service: AuthService<T, S>) -> Self {
        let initial = AuthState::restored(service.token(), service.current_user());
        Self { state: RwSignal::new(initial), service }
    }

    /// Reactive handle for rendering.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn service(&self) -> &AuthService<T, S> {
        &self.service
    }

    /// Adopt a signed-in session and persist it.
    pub fn login(&self, token: String, user: User) {
        self.service.session().save(&token, &user);
        self.state.update(|s| s.login(token, user));
    }

    /// Clear storage and return to the signed-out state.
    pub fn logout(&self) {
        self.service.logout();
        self.state.update(AuthState::logout);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.set_loading(loading));
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.update(|s| s.set_error(error));
    }

    /// Drop to signed-out if storage no longer holds this session, e.g. after
    /// the API client cleared it on a 401.
    pub fn resync(&self) {
        let stored = AuthState::restored(self.service.token(), self.service.current_user());
        if self.state.with_untracked(AuthState::is_authenticated) && !stored.is_authenticated() {
            leptos::logging::log!("stored session gone; signing out");
            self.state.update(AuthState::logout);
        }
    }
}

/// Construct the browser provider and place it in context.
pub fn provide_auth(config: ApiConfig) -> AppAuth {
    let session = SessionStore::new(BrowserStore);
    let service = AuthService::new(ApiClient::new(config, FetchTransport, session));
    let auth = AuthProvider::new(service);
    provide_context(auth.clone());
    auth
}

/// The provider placed in context by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` tree.
pub fn use_auth() -> AppAuth {
    expect_context::<AppAuth>()
}
