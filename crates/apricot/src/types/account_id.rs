//! Account identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Identifier of a Wild Apricot account, used as a path segment in
/// account-scoped endpoints.
///
/// # Example
///
/// ```
/// use apricot::AccountId;
///
/// let id = AccountId::new("123456").unwrap();
/// assert_eq!(id.as_str(), "123456");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account id, validating that it is a single path segment.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the id as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::AccountId {
                value: s.to_string(),
                reason: "must be non-empty".to_string(),
            }
            .into());
        }

        if let Some(c) = s
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
        {
            return Err(InvalidInputError::AccountId {
                value: s.to_string(),
                reason: format!("must not contain {:?}", c),
            }
            .into());
        }

        Ok(())
    }
}

impl From<u64> for AccountId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_numeric_id() {
        let id = AccountId::new("123456").unwrap();
        assert_eq!(id.to_string(), "123456");
        assert_eq!(AccountId::from(123456u64), id);
    }

    #[test]
    fn invalid_empty() {
        assert!(AccountId::new("").is_err());
    }

    #[test]
    fn invalid_path_characters() {
        assert!(AccountId::new("12/contacts").is_err());
        assert!(AccountId::new("12?x=1").is_err());
        assert!(AccountId::new("12 34").is_err());
    }
}
