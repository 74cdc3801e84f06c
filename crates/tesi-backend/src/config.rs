//! Backend connection settings

use std::env;

/// Connection settings for the hosted database API.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Service key sent with every request.
    pub api_key: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Read `TESI_BACKEND_URL` and `TESI_BACKEND_KEY` from the environment,
    /// falling back to the local development stack.
    pub fn from_env() -> Self {
        let base_url = env::var("TESI_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:54321".to_string());
        let api_key = env::var("TESI_BACKEND_KEY").unwrap_or_default();
        Self::new(base_url, api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = BackendConfig::new("https://db.example.com/", "key");
        assert_eq!(config.base_url, "https://db.example.com");
    }

    #[test]
    fn bare_url_is_kept_as_is() {
        let config = BackendConfig::new("http://localhost:54321", "key");
        assert_eq!(config.base_url, "http://localhost:54321");
    }
}
