//! Dashboard page: the default authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `ProtectedRoute`, so a user is normally present; the
//! fallback only shows during the frame where logout empties the state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::role_chips::RoleChips;
use crate::net::types::ADMIN_ROLE;
use crate::routes::AppRoute;
use crate::state::provider::{AuthProvider, use_auth};

/// Upper-cased first letter of `username`, or `?` when empty.
#[must_use]
pub fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[must_use]
pub fn greeting(username: &str) -> String {
    format!("Welcome, {username}!")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = StoredValue::new(use_auth());
    let state = auth.with_value(AuthProvider::state);
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.with_value(AuthProvider::logout);
        navigate(AppRoute::Login.path(), NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Dashboard"</span>
                <span class="toolbar__spacer"></span>
                <Show when=move || state.get().has_any_role(&[ADMIN_ROLE])>
                    <a class="btn" href=AppRoute::Admin.path()>"Admin panel"</a>
                </Show>
                <button class="btn btn--secondary" on:click=on_logout>"Log out"</button>
            </header>
            <Show
                when=move || state.get().user.is_some()
                fallback=|| view! { <p class="dashboard-page__empty">"Session expired or not signed in."</p> }
            >
                {move || {
                    state
                        .get()
                        .user
                        .map(|user| {
                            view! {
                                <section class="profile-card">
                                    <div class="profile-card__avatar">{avatar_initial(&user.username)}</div>
                                    <h2 class="profile-card__greeting">{greeting(&user.username)}</h2>
                                    <dl class="profile-card__details">
                                        <dt>"Username"</dt>
                                        <dd>{user.username.clone()}</dd>
                                        <dt>"Email"</dt>
                                        <dd>{user.email.clone()}</dd>
                                        <dt>"User ID"</dt>
                                        <dd>{user.id}</dd>
                                        <dt>"Roles"</dt>
                                        <dd>
                                            <RoleChips roles=user.roles.clone()/>
                                        </dd>
                                    </dl>
                                </section>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
