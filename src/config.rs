//! API endpoint configuration.
//!
//! The WASM bundle has no process environment at runtime, so the base URL is
//! captured from `API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `API_URL` was not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Remote API location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Load from the compile-time `API_URL` variable, falling back to
    /// [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(option_env!("API_URL"))
    }

    /// Build from an optional raw value. Blank values fall back to the default
    /// and a trailing `/` is dropped so paths can be appended verbatim.
    #[must_use]
    pub fn from_value(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Self { base_url: base.trim_end_matches('/').to_owned() }
    }

    /// Join an API path (`/auth/signin`) onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}
