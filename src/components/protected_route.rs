//! Route wrapper that renders its children only for permitted users.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::routes::{AppRoute, GuardDecision, evaluate};
use crate::state::auth::AuthState;
use crate::state::provider::use_auth;

/// Guard outcome for `state`, recomputed on every auth change but only
/// propagated when the decision itself changes.
pub fn guard_decision(state: RwSignal<AuthState>, required_roles: Vec<String>) -> Memo<GuardDecision> {
    Memo::new(move |_| state.with(|s| evaluate(s, &required_roles)))
}

/// Gate `children` on the current session and, when `required_roles` is
/// non-empty, on holding at least one of those roles.
///
/// The subtree is rebuilt only when the decision changes, so errors or
/// loading flips that keep the user allowed leave page-local state alone.
#[component]
pub fn ProtectedRoute(#[prop(optional)] required_roles: Vec<String>, children: ChildrenFn) -> impl IntoView {
    let required = required_roles.join(", ");
    let decision = guard_decision(use_auth().state(), required_roles);

    move || match decision.get() {
        GuardDecision::Pending => view! { <div class="route-loading">"Loading..."</div> }.into_any(),
        GuardDecision::RedirectTo(route) => {
            if route == AppRoute::Dashboard {
                leptos::logging::warn!("missing required roles: {required}");
            }
            view! { <Redirect path=route.path()/> }.into_any()
        }
        GuardDecision::Allowed => children().into_any(),
    }
}
