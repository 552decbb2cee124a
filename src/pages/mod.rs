//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and keeps its submit and
//! validation logic in plain functions so it can be tested without a DOM.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod register;
