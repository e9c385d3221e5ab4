//! Client configuration.
//!
//! Every endpoint and limit the client uses lives here so that callers can
//! point the client at stub servers or other API versions.

use std::time::Duration;

use crate::Result;
use crate::types::ServiceUrl;

/// Default OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://oauth.wildapricot.org/auth/token";

/// Default API base URL (version 2.2).
pub const DEFAULT_API_BASE: &str = "https://api.wildapricot.org/v2.2";

/// Default page cap for a single aggregation.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Which primary token exchange failures trigger the API-key fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Fall back on any failure (network, non-success status, malformed body).
    #[default]
    AnyFailure,
    /// Fall back only when the server rejects the credentials (400/401/403).
    /// Transport errors and server errors are reported directly.
    CredentialRejection,
}

/// Safety cap on paginated aggregation.
///
/// A server that never stops issuing continuation tokens would otherwise
/// keep the fetch loop running forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit {
    /// Maximum number of pages fetched in one aggregation.
    pub max_pages: Option<u32>,
    /// Maximum wall-clock time for one aggregation.
    pub max_elapsed: Option<Duration>,
}

impl PageLimit {
    /// No cap at all.
    pub const fn unbounded() -> Self {
        Self {
            max_pages: None,
            max_elapsed: None,
        }
    }

    /// Cap on the number of pages only.
    ///
    /// The first page is always fetched, so a cap of zero behaves like a
    /// cap of one.
    pub const fn pages(max_pages: u32) -> Self {
        Self {
            max_pages: Some(max_pages),
            max_elapsed: None,
        }
    }

    /// Adds a wall-clock cap.
    pub const fn with_max_elapsed(mut self, max_elapsed: Duration) -> Self {
        self.max_elapsed = Some(max_elapsed);
        self
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::pages(DEFAULT_MAX_PAGES)
    }
}

/// Configuration shared by the authentication provider and the fetchers.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// OAuth token endpoint.
    pub token_url: ServiceUrl,
    /// API base URL; resource paths are appended to it.
    pub api_base: ServiceUrl,
    /// Safety cap on paginated fetches.
    pub page_limit: PageLimit,
    /// Per-request timeout handed to the HTTP client.
    pub request_timeout: Option<Duration>,
    /// Fallback policy of the authentication provider.
    pub fallback: FallbackPolicy,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl ApiConfig {
    /// Configuration pointing at the given endpoints, other settings default.
    pub fn new(token_url: ServiceUrl, api_base: ServiceUrl) -> Self {
        Self {
            token_url,
            api_base,
            page_limit: PageLimit::default(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
            fallback: FallbackPolicy::default(),
            user_agent: concat!("apricot/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Parse both endpoint URLs from strings.
    pub fn from_urls(token_url: impl AsRef<str>, api_base: impl AsRef<str>) -> Result<Self> {
        Ok(Self::new(
            ServiceUrl::new(token_url)?,
            ServiceUrl::new(api_base)?,
        ))
    }

    pub fn with_page_limit(mut self, page_limit: PageLimit) -> Self {
        self.page_limit = page_limit;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_urls(DEFAULT_TOKEN_URL, DEFAULT_API_BASE)
            .expect("default endpoint URLs are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_wild_apricot() {
        let config = ApiConfig::default();
        assert_eq!(config.token_url.as_str(), DEFAULT_TOKEN_URL);
        assert_eq!(config.api_base.as_str(), DEFAULT_API_BASE);
        assert_eq!(config.page_limit.max_pages, Some(DEFAULT_MAX_PAGES));
        assert_eq!(config.fallback, FallbackPolicy::AnyFailure);
    }

    #[test]
    fn from_urls_rejects_plain_http() {
        assert!(ApiConfig::from_urls("http://oauth.example.com/token", DEFAULT_API_BASE).is_err());
    }

    #[test]
    fn page_limit_builders() {
        let limit = PageLimit::pages(5).with_max_elapsed(Duration::from_secs(2));
        assert_eq!(limit.max_pages, Some(5));
        assert_eq!(limit.max_elapsed, Some(Duration::from_secs(2)));
        assert_eq!(PageLimit::unbounded().max_pages, None);
    }
}
