//! Typed records returned by the API.

use serde::{Deserialize, Serialize};

/// An account reachable by the authenticated identity.
///
/// Fields beyond id, name and URL are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    pub id: u64,
    pub name: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A contact record.
///
/// Which fields are present depends on the `$select` projection of the
/// request, so every field is optional. Fields without a typed counterpart
/// are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Contact {
    /// First and last name joined by a space, skipping missing parts.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_from_api_json() {
        let account: Account = serde_json::from_value(json!({
            "Id": 123456,
            "Name": "Chess Club",
            "Url": "https://api.wildapricot.org/v2.2/accounts/123456",
            "PrimaryDomainName": "chess.wildapricot.org"
        }))
        .unwrap();
        assert_eq!(account.id, 123456);
        assert_eq!(account.name, "Chess Club");
        assert_eq!(account.extra["PrimaryDomainName"], "chess.wildapricot.org");

        let back = serde_json::to_value(&account).unwrap();
        assert_eq!(back["PrimaryDomainName"], "chess.wildapricot.org");
        assert_eq!(back["Id"], 123456);
    }

    #[test]
    fn contact_keeps_unknown_fields() {
        let contact: Contact = serde_json::from_value(json!({
            "FirstName": "Ada",
            "LastName": "Lovelace",
            "Email": "ada@example.com",
            "MembershipLevel": {"Id": 7}
        }))
        .unwrap();
        assert_eq!(contact.display_name(), "Ada Lovelace");
        assert_eq!(contact.email.as_deref(), Some("ada@example.com"));
        assert_eq!(contact.extra["MembershipLevel"]["Id"], 7);
    }

    #[test]
    fn display_name_with_missing_parts() {
        let contact = Contact {
            last_name: Some("Hopper".to_string()),
            ..Default::default()
        };
        assert_eq!(contact.display_name(), "Hopper");
    }
}
