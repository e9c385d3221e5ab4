//! Application credentials type.

use std::fmt;

/// Application credentials for the token exchange.
///
/// Holds the API key and, optionally, the client secret of an authorized
/// application. Nothing is validated locally.
///
/// # Security
///
/// Neither the API key nor the client secret is exposed in Debug output.
/// With the `APIKEY:<apiKey>` scheme the API key alone is a full credential.
///
/// # Example
///
/// ```
/// use apricot::Credentials;
///
/// let creds = Credentials::new("api-key", Some("client-secret"));
/// assert_eq!(creds.api_key(), "api-key");
/// assert!(creds.has_secret());
/// ```
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    client_secret: Option<String>,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The API key (client id) of the application
    /// * `client_secret` - The client secret, if the application has one
    pub fn new(api_key: impl Into<String>, client_secret: Option<impl Into<String>>) -> Self {
        Self {
            api_key: api_key.into(),
            client_secret: client_secret.map(Into::into),
        }
    }

    /// Credentials consisting of an API key only.
    pub fn api_key_only(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client_secret: None,
        }
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// True if a client secret was supplied.
    pub fn has_secret(&self) -> bool {
        self.client_secret.is_some()
    }

    /// Returns the client secret.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    pub(crate) fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hide_key_and_secret_in_debug() {
        let creds = Credentials::new("my-api-key", Some("secret123"));
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("my-api-key"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn api_key_only_has_no_secret() {
        let creds = Credentials::api_key_only("my-api-key");
        assert!(!creds.has_secret());
        assert_eq!(creds.client_secret(), None);
    }
}
