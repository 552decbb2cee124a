//! Login page: username + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates locally, sends exactly one sign-in request per valid submit, and
//! reports the result to the auth provider. Submitting is disabled while a
//! request is in flight.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "csr")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::net::transport::HttpTransport;
use crate::net::types::LoginRequest;
#[cfg(feature = "csr")]
use crate::routes::AppRoute;
use crate::state::provider::{AuthProvider, use_auth};
use crate::util::error_text::{AuthAction, describe};
use crate::util::storage::KeyValueStore;

pub const MIN_PASSWORD_LEN: usize = 6;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

/// Raw login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Per-field validation messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Check the form. The request carries the fields exactly as typed.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_login(form: &LoginForm) -> Result<LoginRequest, LoginFieldErrors> {
    let mut errors = LoginFieldErrors::default();
    if form.username.trim().is_empty() {
        errors.username = Some(USERNAME_REQUIRED);
    }
    if form.password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED);
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some(PASSWORD_TOO_SHORT);
    }
    if errors == LoginFieldErrors::default() {
        Ok(LoginRequest { username: form.username.clone(), password: form.password.clone() })
    } else {
        Err(errors)
    }
}

/// Result of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Nothing was sent.
    Invalid(LoginFieldErrors),
    SignedIn,
    /// The error text is in the provider state.
    Failed,
}

/// Validate, sign in, and report to `auth`.
pub async fn submit_login<T: HttpTransport, S: KeyValueStore>(auth: &AuthProvider<T, S>, form: &LoginForm) -> LoginOutcome {
    let request = match validate_login(form) {
        Ok(request) => request,
        Err(errors) => return LoginOutcome::Invalid(errors),
    };
    auth.set_loading(true);
    match auth.service().login(&request).await {
        Ok(resp) => {
            let user = resp.user();
            auth.login(resp.token, user);
            LoginOutcome::SignedIn
        }
        Err(e) => {
            auth.set_error(Some(describe(AuthAction::SignIn, &e)));
            LoginOutcome::Failed
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = StoredValue::new(use_auth());
    let state = auth.with_value(AuthProvider::state);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(LoginFieldErrors::default());
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let clear_error = move || {
        if state.with_untracked(|s| s.error.is_some()) {
            auth.with_value(|a| a.set_error(None));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.loading) {
            return;
        }
        let form = LoginForm { username: username.get_untracked(), password: password.get_untracked() };
        if let Err(errors) = validate_login(&form) {
            field_errors.set(errors);
            return;
        }
        field_errors.set(LoginFieldErrors::default());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let auth = auth.get_value();
                if submit_login(&auth, &form).await == LoginOutcome::SignedIn {
                    navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <Show when=move || state.get().error.is_some()>
                    <p class="auth-alert auth-alert--error">{move || state.get().error.unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label" for="username">"Username"</label>
                    <input
                        id="username"
                        name="username"
                        class="auth-input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        disabled=move || state.get().loading
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                            field_errors.update(|e| e.username = None);
                            clear_error();
                        }
                    />
                    <Show when=move || field_errors.get().username.is_some()>
                        <p class="auth-field-error">{move || field_errors.get().username.unwrap_or_default()}</p>
                    </Show>
                    <label class="auth-label" for="password">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        disabled=move || state.get().loading
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            field_errors.update(|e| e.password = None);
                            clear_error();
                        }
                    />
                    <Show when=move || field_errors.get().password.is_some()>
                        <p class="auth-field-error">{move || field_errors.get().password.unwrap_or_default()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || state.get().loading>
                        {move || if state.get().loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "No account yet? "
                    <A href="/register">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
