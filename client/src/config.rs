//! Collaborator API configuration.
//!
//! The base URL is fixed at build time: `PUBLIC_API_BASE_URL` in the build
//! environment overrides the default remote host.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://gym-app-backend-2-pv91.onrender.com";
/// Hosted backend may cold-start; requests are abandoned after this long.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 80_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_override(option_env!("PUBLIC_API_BASE_URL"))
    }
}

impl ApiConfig {
    /// Build config from an optional base-URL override. Blank overrides fall
    /// back to the default host.
    pub fn from_override(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url, timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS) }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for an API path such as `/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
