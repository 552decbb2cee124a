//! Networking modules for the remote REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends raw requests, `api` layers bearer auth and JSON on top,
//! `auth` and `users` wrap specific endpoints, and `types` defines the wire
//! schema.

pub mod api;
pub mod auth;
pub mod error;
#[cfg(test)]
pub(crate) mod mock;
pub mod transport;
pub mod types;
pub mod users;
