//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared auth state from Leptos context and are composed by
//! the route-level pages.

pub mod protected_route;
pub mod role_chips;
