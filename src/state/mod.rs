//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session` persistence, `auth` transitions, the
//! `provider` that owns the live signal, `admin` table data) so pages depend
//! on small focused models.

pub mod admin;
pub mod auth;
pub mod provider;
pub mod session;
