//! Registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Creates an account without signing in. On success the form resets and the
//! page sends the user to `/login` after a short delay.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::sync::LazyLock;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "csr")]
use leptos_router::{NavigateOptions, hooks::use_navigate};
use regex::Regex;

use crate::net::transport::HttpTransport;
use crate::net::types::SignupRequest;
#[cfg(feature = "csr")]
use crate::routes::AppRoute;
use crate::state::provider::{AuthProvider, use_auth};
use crate::util::error_text::{AuthAction, describe};
use crate::util::storage::KeyValueStore;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
/// Delay before leaving for the login page after a successful sign-up.
pub const REDIRECT_DELAY_MS: u64 = 3_000;
/// Role requested by the "request admin access" checkbox.
pub const ADMIN_REQUEST_ROLE: &str = "admin";

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const REGISTERED_NOTICE: &str = "Registration successful! Redirecting to the sign-in page...";

/// Raw registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub request_admin: bool,
}

/// Per-field validation messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterFieldErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

/// Loose `local@domain.tld` shape: non-space text, `@`, non-space text, `.`,
/// non-space text. Unanchored, so surrounding text is tolerated.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Check the form and build the sign-up payload.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_register(form: &RegisterForm) -> Result<SignupRequest, RegisterFieldErrors> {
    let mut errors = RegisterFieldErrors::default();

    if form.username.trim().is_empty() {
        errors.username = Some(USERNAME_REQUIRED);
    } else if form.username.chars().count() < MIN_USERNAME_LEN {
        errors.username = Some(USERNAME_TOO_SHORT);
    }

    if form.email.trim().is_empty() {
        errors.email = Some(EMAIL_REQUIRED);
    } else if !looks_like_email(&form.email) {
        errors.email = Some(EMAIL_INVALID);
    }

    if form.password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED);
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some(PASSWORD_TOO_SHORT);
    }

    if form.password != form.confirm_password {
        errors.confirm_password = Some(PASSWORDS_DIFFER);
    }

    if errors != RegisterFieldErrors::default() {
        return Err(errors);
    }
    Ok(SignupRequest {
        username: form.username.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
        role: form.request_admin.then(|| vec![ADMIN_REQUEST_ROLE.to_owned()]),
    })
}

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Nothing was sent.
    Invalid(RegisterFieldErrors),
    /// Server acknowledgement message.
    Registered(String),
    /// The error text is in the provider state.
    Failed,
}

/// Validate, sign up, and report loading/error to `auth`.
pub async fn submit_register<T: HttpTransport, S: KeyValueStore>(
    auth: &AuthProvider<T, S>,
    form: &RegisterForm,
) -> RegisterOutcome {
    let request = match validate_register(form) {
        Ok(request) => request,
        Err(errors) => return RegisterOutcome::Invalid(errors),
    };
    auth.set_loading(true);
    match auth.service().register(&request).await {
        Ok(resp) => {
            auth.set_loading(false);
            RegisterOutcome::Registered(resp.message)
        }
        Err(e) => {
            auth.set_error(Some(describe(AuthAction::SignUp, &e)));
            RegisterOutcome::Failed
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = StoredValue::new(use_auth());
    let state = auth.with_value(AuthProvider::state);
    let form = RwSignal::new(RegisterForm::default());
    let field_errors = RwSignal::new(RegisterFieldErrors::default());
    let success = RwSignal::new(false);
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
        let current = form.get_untracked();
        if let Err(errors) = validate_register(&current) {
            field_errors.set(errors);
            return;
        }
        field_errors.set(RegisterFieldErrors::default());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let auth = auth.get_value();
                if let RegisterOutcome::Registered(message) = submit_register(&auth, &current).await {
                    leptos::logging::log!("registered: {message}");
                    success.set(true);
                    form.set(RegisterForm::default());
                    gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS)).await;
                    navigate(AppRoute::Login.path(), NavigateOptions::default());
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <Show when=move || state.get().error.is_some()>
                    <p class="auth-alert auth-alert--error">{move || state.get().error.unwrap_or_default()}</p>
                </Show>
                <Show when=move || success.get()>
                    <p class="auth-alert auth-alert--success">{REGISTERED_NOTICE}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label" for="username">"Username"</label>
                    <input
                        id="username"
                        name="username"
                        class="auth-input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || form.get().username
                        disabled=move || state.get().loading
                        on:input=move |ev| {
                            form.update(|f| f.username = event_target_value(&ev));
                            field_errors.update(|e| e.username = None);
                            clear_error();
                        }
                    />
                    <Show when=move || field_errors.get().username.is_some()>
                        <p class="auth-field-error">{move || field_errors.get().username.unwrap_or_default()}</p>
                    </Show>

                    <label class="auth-label" for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        prop:value=move || form.get().email
                        disabled=move || state.get().loading
                        on:input=move |ev| {
                            form.update(|f| f.email = event_target_value(&ev));
                            field_errors.update(|e| e.email = None);
                            clear_error();
                        }
                    />
                    <Show when=move || field_errors.get().email.is_some()>
                        <p class="auth-field-error">{move || field_errors.get().email.unwrap_or_default()}</p>
                    </Show>

                    <label class="auth-label" for="password">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.get().password
                        disabled=move || state.get().loading
                        on:input=move |ev| {
                            form.update(|f| f.password = event_target_value(&ev));
                            field_errors.update(|e| e.password = None);
                            clear_error();
                        }
                    />
                    <Show when=move || field_errors.get().password.is_some()>
                        <p class="auth-field-error">{move || field_errors.get().password.unwrap_or_default()}</p>
                    </Show>

                    <label class="auth-label" for="confirm-password">"Confirm password"</label>
                    <input
                        id="confirm-password"
                        name="confirmPassword"
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.get().confirm_password
                        disabled=move || state.get().loading
                        on:input=move |ev| {
                            form.update(|f| f.confirm_password = event_target_value(&ev));
                            field_errors.update(|e| e.confirm_password = None);
                            clear_error();
                        }
                    />
                    <Show when=move || field_errors.get().confirm_password.is_some()>
                        <p class="auth-field-error">
                            {move || field_errors.get().confirm_password.unwrap_or_default()}
                        </p>
                    </Show>

                    <label class="auth-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().request_admin
                            disabled=move || state.get().loading
                            on:change=move |ev| form.update(|f| f.request_admin = event_target_checked(&ev))
                        />
                        "Request admin access"
                    </label>

                    <button class="auth-button" type="submit" disabled=move || state.get().loading>
                        {move || if state.get().loading { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
