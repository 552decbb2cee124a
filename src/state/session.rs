//! Persisted session record: bearer token + serialized user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read at startup to rehydrate auth state, written after a successful sign-in,
//! and cleared on logout or when the API client sees a 401. The two entries are
//! independent; callers write and clear them together.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::KeyValueStore;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the JSON user record.
pub const USER_KEY: &str = "user";

/// Token/user persistence over a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored bearer token. An empty entry counts as absent.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Stored user. A corrupted entry is deleted and reported as absent.
    pub fn user(&self) -> Option<User> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::warn!("discarding malformed stored user: {e}");
                self.storage.remove(USER_KEY);
                None
            }
        }
    }

    /// Write token and user. No rollback if the second write is lost.
    pub fn save(&self, token: &str, user: &User) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        self.storage.set(TOKEN_KEY, token);
        self.storage.set(USER_KEY, &raw);
    }

    /// Remove both entries.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
