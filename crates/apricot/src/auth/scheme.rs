//! Basic-authentication credential schemes of the token endpoint.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::Credentials;

/// User name presented by the API-key scheme.
const API_KEY_USER: &str = "APIKEY";

/// How credentials are encoded into the `Authorization: Basic` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialScheme {
    /// `<apiKey>:<clientSecret>`
    ClientSecret,
    /// `APIKEY:<apiKey>`; any client secret is ignored.
    ApiKey,
}

impl CredentialScheme {
    /// The scheme tried first for the given credentials.
    pub fn primary_for(credentials: &Credentials) -> Self {
        if credentials.has_secret() {
            CredentialScheme::ClientSecret
        } else {
            CredentialScheme::ApiKey
        }
    }

    /// Builds the `Authorization` header value, or `None` if the scheme
    /// needs a client secret the credentials don't have.
    pub(crate) fn basic_header(&self, credentials: &Credentials) -> Option<String> {
        let raw = match self {
            CredentialScheme::ClientSecret => {
                format!("{}:{}", credentials.api_key(), credentials.client_secret()?)
            }
            CredentialScheme::ApiKey => format!("{}:{}", API_KEY_USER, credentials.api_key()),
        };
        Some(format!("Basic {}", STANDARD.encode(raw.as_bytes())))
    }
}

impl fmt::Display for CredentialScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialScheme::ClientSecret => write!(f, "client secret"),
            CredentialScheme::ApiKey => write!(f, "API key"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_secret_header() {
        let creds = Credentials::new("key", Some("secret"));
        assert_eq!(
            CredentialScheme::ClientSecret.basic_header(&creds).as_deref(),
            Some("Basic a2V5OnNlY3JldA==")
        );
    }

    #[test]
    fn api_key_header_discards_secret() {
        let creds = Credentials::new("key", Some("secret"));
        assert_eq!(
            CredentialScheme::ApiKey.basic_header(&creds).as_deref(),
            Some("Basic QVBJS0VZOmtleQ==")
        );
    }

    #[test]
    fn client_secret_scheme_needs_secret() {
        let creds = Credentials::api_key_only("key");
        assert!(CredentialScheme::ClientSecret.basic_header(&creds).is_none());
        assert_eq!(
            CredentialScheme::primary_for(&creds),
            CredentialScheme::ApiKey
        );
    }
}
