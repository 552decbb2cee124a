//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and user-facing text
//! from page logic to improve reuse and testability.

pub mod error_text;
pub mod storage;
