//! Sign-in, sign-up, and logout against the auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call [`AuthService`] and report results to the auth provider. The
//! service keeps the session store in step with sign-in results; it never
//! swallows errors.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::HttpTransport;
use super::types::{LoginRequest, LoginResponse, MessageResponse, SignupRequest, User};
use crate::state::session::SessionStore;
use crate::util::storage::KeyValueStore;

pub const SIGNIN_PATH: &str = "/auth/signin";
pub const SIGNUP_PATH: &str = "/auth/signup";

/// Auth endpoint orchestration over an [`ApiClient`].
#[derive(Clone, Debug)]
pub struct AuthService<T, S> {
    api: ApiClient<T, S>,
}

impl<T: HttpTransport, S: KeyValueStore> AuthService<T, S> {
    pub fn new(api: ApiClient<T, S>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        &self.api
    }

    pub fn session(&self) -> &SessionStore<S> {
        self.api.session()
    }

    /// Sign in and persist the returned token + user.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`] unchanged.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        match self.api.post::<_, LoginResponse>(SIGNIN_PATH, credentials).await {
            Ok(resp) => {
                if !resp.token.is_empty() {
                    self.session().save(&resp.token, &resp.user());
                }
                Ok(resp)
            }
            Err(e) => {
                leptos::logging::error!("login failed: {e}");
                Err(e)
            }
        }
    }

    /// Create an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`] unchanged.
    pub async fn register(&self, data: &SignupRequest) -> Result<MessageResponse, ApiError> {
        self.api
            .post::<_, MessageResponse>(SIGNUP_PATH, data)
            .await
            .inspect_err(|e| leptos::logging::error!("registration failed: {e}"))
    }

    /// Drop the local session. The server is not contacted.
    pub fn logout(&self) {
        self.session().clear();
    }

    pub fn current_user(&self) -> Option<User> {
        self.session().user()
    }

    pub fn token(&self) -> Option<String> {
        self.session().token()
    }
}
