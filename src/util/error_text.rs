//! User-facing text for API failures.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are the only layer that turns an [`ApiError`] into words, and they all
//! do it through [`describe`]. Sign-up conflicts prefer the structured `code`
//! field and fall back to matching the server's message text.

#[cfg(test)]
#[path = "error_text_test.rs"]
mod error_text_test;

use crate::net::error::ApiError;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";
pub const ACCESS_DENIED: &str = "Access denied. Please contact the administrator.";
pub const USERNAME_TAKEN: &str = "This username is already taken.";
pub const EMAIL_TAKEN: &str = "This email is already in use.";
pub const SERVER_UNREACHABLE: &str = "Cannot reach the server. Please check your internet connection.";

/// The action that failed; selects the wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    SignIn,
    SignUp,
    ManageUsers,
}

impl AuthAction {
    fn prefix(self) -> &'static str {
        match self {
            Self::SignIn => "Sign-in error",
            Self::SignUp => "Registration error",
            Self::ManageUsers => "User management error",
        }
    }
}

/// Translate `err` for display after `action` failed.
#[must_use]
pub fn describe(action: AuthAction, err: &ApiError) -> String {
    let Some(status) = err.status() else {
        return match err {
            ApiError::Network(_) => SERVER_UNREACHABLE.to_owned(),
            _ => format!("{}: Please try again later.", action.prefix()),
        };
    };
    match (action, status) {
        (AuthAction::SignIn, 401) => INVALID_CREDENTIALS.to_owned(),
        (AuthAction::SignIn, 403) => ACCESS_DENIED.to_owned(),
        (AuthAction::SignUp, 400) => signup_conflict(err)
            .map_or_else(|| with_detail(action, err, "Please check your details."), str::to_owned),
        _ => with_detail(action, err, "Please try again later."),
    }
}

fn signup_conflict(err: &ApiError) -> Option<&'static str> {
    match err.server_code() {
        Some("USERNAME_TAKEN") => return Some(USERNAME_TAKEN),
        Some("EMAIL_TAKEN") => return Some(EMAIL_TAKEN),
        _ => {}
    }
    let message = err.server_message()?;
    if message.contains("Username") {
        Some(USERNAME_TAKEN)
    } else if message.contains("Email") {
        Some(EMAIL_TAKEN)
    } else {
        None
    }
}

fn with_detail(action: AuthAction, err: &ApiError, fallback: &str) -> String {
    format!("{}: {}", action.prefix(), err.server_message().unwrap_or(fallback))
}
