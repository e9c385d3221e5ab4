//! Service URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated URL of a Wild Apricot endpoint (token endpoint or API base).
///
/// The URL must be absolute and use HTTPS; plain HTTP is accepted only for
/// localhost so that stub servers can be used in tests.
///
/// # Example
///
/// ```
/// use apricot::ServiceUrl;
///
/// let base = ServiceUrl::new("https://api.wildapricot.org/v2.2").unwrap();
/// assert_eq!(base.join(&["accounts", "42", "contacts"]).as_str(),
///            "https://api.wildapricot.org/v2.2/accounts/42/contacts");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceUrl(Url);

impl ServiceUrl {
    /// Create a new service URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServiceUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns this URL with `segments` appended to its path.
    ///
    /// Segments are percent-encoded; a trailing slash on the base is ignored.
    pub fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        // validate() rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Returns the URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServiceUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServiceUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServiceUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let url = ServiceUrl::new("https://oauth.wildapricot.org/auth/token").unwrap();
        assert_eq!(url.host(), Some("oauth.wildapricot.org"));
    }

    #[test]
    fn valid_localhost_http() {
        let url = ServiceUrl::new("http://127.0.0.1:8080/v2.2").unwrap();
        assert_eq!(url.host(), Some("127.0.0.1"));
    }

    #[test]
    fn join_ignores_trailing_slash() {
        let base = ServiceUrl::new("https://api.wildapricot.org/v2.2/").unwrap();
        assert_eq!(
            base.join(&["accounts"]).as_str(),
            "https://api.wildapricot.org/v2.2/accounts"
        );

        let root = ServiceUrl::new("https://api.wildapricot.org").unwrap();
        assert_eq!(
            root.join(&["accounts"]).as_str(),
            "https://api.wildapricot.org/accounts"
        );
    }

    #[test]
    fn join_percent_encodes_segments() {
        let base = ServiceUrl::new("https://api.wildapricot.org/v2.2").unwrap();
        assert_eq!(
            base.join(&["accounts", "a b"]).as_str(),
            "https://api.wildapricot.org/v2.2/accounts/a%20b"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ServiceUrl::new("http://api.wildapricot.org").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ServiceUrl::new("/v2.2/accounts").is_err());
    }
}
