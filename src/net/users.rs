//! Admin user-management calls (`/users`).

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::HttpTransport;
use super::types::{AdminUser, UserDraft};
use crate::util::storage::KeyValueStore;

pub const USERS_PATH: &str = "/users";

fn user_endpoint(id: i64) -> String {
    format!("{USERS_PATH}/{id}")
}

/// Fetch every account.
///
/// # Errors
///
/// Returns the [`ApiError`] from the client.
pub async fn fetch_users<T: HttpTransport, S: KeyValueStore>(api: &ApiClient<T, S>) -> Result<Vec<AdminUser>, ApiError> {
    api.get(USERS_PATH).await
}

/// Create an account from `draft`.
///
/// # Errors
///
/// Returns the [`ApiError`] from the client.
pub async fn create_user<T: HttpTransport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    draft: &UserDraft,
) -> Result<AdminUser, ApiError> {
    api.post(USERS_PATH, draft).await
}

/// Replace account `id` with `draft`.
///
/// # Errors
///
/// Returns the [`ApiError`] from the client.
pub async fn update_user<T: HttpTransport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    id: i64,
    draft: &UserDraft,
) -> Result<AdminUser, ApiError> {
    api.put(&user_endpoint(id), draft).await
}

/// Delete account `id`.
///
/// # Errors
///
/// Returns the [`ApiError`] from the client.
pub async fn delete_user<T: HttpTransport, S: KeyValueStore>(api: &ApiClient<T, S>, id: i64) -> Result<(), ApiError> {
    api.delete(&user_endpoint(id)).await
}
