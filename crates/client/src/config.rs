//! Client configuration — backend base URL resolution.

/// Environment variable that selects the backend base URL.
pub const API_URL_ENV: &str = "BENCHDASH_API_URL";

/// Base URL used when no override is supplied.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Versioned path prefix shared by every endpoint.
pub(crate) const API_V1_PREFIX: &str = "/api/v1";

/// Configuration for an [`ApiClient`](crate::ApiClient).
///
/// The base URL is an explicit value injected at construction rather than an
/// ambient global, so tests can point a client at a local mock backend without
/// mutating process environment. It is read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Create a config targeting the given base URL.
    ///
    /// A trailing `/` is trimmed so endpoint concatenation never produces
    /// double slashes.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from `BENCHDASH_API_URL`, falling back to
    /// [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) => Self::new(&url),
            Err(_) => Self::new(DEFAULT_API_URL),
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
