//! Endpoint constants and request/response wire types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Token endpoint
// ============================================================================

/// OAuth grant used for application credentials.
pub const GRANT_TYPE: &str = "client_credentials";

/// Scope requested with every token.
pub const SCOPE: &str = "auto";

/// Form body of a token request.
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'a str,
    pub scope: &'a str,
}

impl Default for TokenRequest<'static> {
    fn default() -> Self {
        Self {
            grant_type: GRANT_TYPE,
            scope: SCOPE,
        }
    }
}

/// Response from the token endpoint.
///
/// `access_token` is optional here so that a body without it is reported as
/// a malformed response rather than a decode failure.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

// ============================================================================
// REST API
// ============================================================================

/// Path segment of the accounts listing.
pub const ACCOUNTS: &str = "accounts";

/// Path segment of the contacts collection.
pub const CONTACTS: &str = "contacts";

/// Item field of a contacts page.
pub const CONTACTS_FIELD: &str = "Contacts";

/// Default `$select` projection for contacts.
pub const CONTACTS_SELECT: &str = "FirstName,LastName,Email";

/// Default `$filter` expression for contacts.
pub const CONTACTS_FILTER: &str = "Archived eq false";

/// Query parameters of a page request.
#[derive(Debug, Serialize)]
pub struct PageQuery<'a> {
    #[serde(rename = "$async")]
    pub async_mode: bool,
    #[serde(rename = "$select", skip_serializing_if = "Option::is_none")]
    pub select: Option<&'a str>,
    #[serde(rename = "$filter", skip_serializing_if = "Option::is_none")]
    pub filter: Option<&'a str>,
    #[serde(rename = "$continuationToken", skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<&'a str>,
}

/// A page of a paginated collection.
///
/// The item array lives under a resource-specific field name, so it is kept
/// in `fields` and picked out by the fetcher.
#[derive(Debug, Deserialize)]
pub struct PageResponse {
    #[serde(rename = "ResultContinuation", default)]
    pub continuation: Option<String>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl PageResponse {
    /// The continuation token, if present and non-empty.
    pub fn next_token(&self) -> Option<&str> {
        self.continuation.as_deref().filter(|t| !t.is_empty())
    }
}

/// Error body returned by the token endpoint (`error`, `error_description`)
/// or by the API (`message`).
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_query_omits_absent_token() {
        let query = PageQuery {
            async_mode: false,
            select: Some(CONTACTS_SELECT),
            filter: Some(CONTACTS_FILTER),
            continuation_token: None,
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            json!({
                "$async": false,
                "$select": "FirstName,LastName,Email",
                "$filter": "Archived eq false"
            })
        );
    }

    #[test]
    fn page_response_treats_empty_and_null_token_as_end() {
        let page: PageResponse =
            serde_json::from_value(json!({"Contacts": [], "ResultContinuation": ""})).unwrap();
        assert_eq!(page.next_token(), None);

        let page: PageResponse =
            serde_json::from_value(json!({"Contacts": [], "ResultContinuation": null})).unwrap();
        assert_eq!(page.next_token(), None);

        let page: PageResponse =
            serde_json::from_value(json!({"Contacts": [], "ResultContinuation": "CT1"})).unwrap();
        assert_eq!(page.next_token(), Some("CT1"));
        assert!(page.fields.contains_key("Contacts"));
    }

    #[test]
    fn error_response_accepts_api_message() {
        let err: ErrorResponse =
            serde_json::from_value(json!({"Message": "Account not found"})).unwrap();
        assert_eq!(err.message.as_deref(), Some("Account not found"));
    }
}
