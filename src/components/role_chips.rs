//! Role badges shared by the dashboard and admin table.

#[cfg(test)]
#[path = "role_chips_test.rs"]
mod role_chips_test;

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::net::types::ADMIN_ROLE;

/// Display label for a role claim: `ROLE_ADMIN` -> `Admin`.
#[must_use]
pub fn role_label(role: &str) -> String {
    let bare = role.strip_prefix("ROLE_").unwrap_or(role).to_ascii_lowercase();
    let mut chars = bare.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Chip modifier class for a role.
#[must_use]
pub fn role_class(role: &str) -> &'static str {
    if role == ADMIN_ROLE { "role-chip role-chip--admin" } else { "role-chip" }
}

#[component]
pub fn RoleChips(roles: BTreeSet<String>) -> impl IntoView {
    view! {
        <span class="role-chips">
            {roles
                .into_iter()
                .map(|role| view! { <span class=role_class(&role)>{role_label(&role)}</span> })
                .collect_view()}
        </span>
    }
}
