//! Description of an account-scoped paginated resource.

use crate::api::endpoints::{CONTACTS, CONTACTS_FIELD, CONTACTS_FILTER, CONTACTS_SELECT};
use crate::error::{Error, InvalidInputError};

/// What to fetch from `{apiBase}/accounts/{accountId}/{resource}`.
///
/// Carries the resource path segment, the name of the item array in each
/// page, and the optional `$select` projection and `$filter` expression.
///
/// # Example
///
/// ```
/// use apricot::ResourceQuery;
///
/// let query = ResourceQuery::contacts().with_filter("Status eq 'Active'");
/// assert_eq!(query.resource(), "contacts");
/// assert_eq!(query.items_field(), "Contacts");
///
/// let events = ResourceQuery::new("events", "Events").unwrap();
/// assert_eq!(events.select(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    resource: String,
    items_field: String,
    select: Option<String>,
    filter: Option<String>,
}

impl ResourceQuery {
    /// A query for an arbitrary resource with no projection or filter.
    pub fn new(resource: impl Into<String>, items_field: impl Into<String>) -> Result<Self, Error> {
        let resource = resource.into();
        if resource.is_empty() || resource.contains(['/', '?', '#']) {
            return Err(InvalidInputError::Resource {
                value: resource,
                reason: "must be a single non-empty path segment".to_string(),
            }
            .into());
        }

        Ok(Self {
            resource,
            items_field: items_field.into(),
            select: None,
            filter: None,
        })
    }

    /// Non-archived contacts, projected to first name, last name and email.
    pub fn contacts() -> Self {
        Self {
            resource: CONTACTS.to_string(),
            items_field: CONTACTS_FIELD.to_string(),
            select: Some(CONTACTS_SELECT.to_string()),
            filter: Some(CONTACTS_FILTER.to_string()),
        }
    }

    pub fn with_select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    pub fn without_select(mut self) -> Self {
        self.select = None;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn without_filter(mut self) -> Self {
        self.filter = None;
        self
    }

    /// Overrides the name of the item array in each page.
    pub fn with_items_field(mut self, items_field: impl Into<String>) -> Self {
        self.items_field = items_field.into();
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn items_field(&self) -> &str {
        &self.items_field
    }

    pub fn select(&self) -> Option<&str> {
        self.select.as_deref()
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contacts_defaults() {
        let query = ResourceQuery::contacts();
        assert_eq!(query.select(), Some("FirstName,LastName,Email"));
        assert_eq!(query.filter(), Some("Archived eq false"));
    }

    #[test]
    fn rejects_nested_resource() {
        assert!(ResourceQuery::new("contacts/1", "Contacts").is_err());
        assert!(ResourceQuery::new("", "Contacts").is_err());
    }

    #[test]
    fn builder_overrides() {
        let query = ResourceQuery::contacts()
            .without_filter()
            .with_select("Id")
            .with_items_field("items");
        assert_eq!(query.filter(), None);
        assert_eq!(query.select(), Some("Id"));
        assert_eq!(query.items_field(), "items");
    }
}
