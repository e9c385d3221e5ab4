//! Single-response collections.

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::api::ApiClient;
use crate::api::endpoints::ACCOUNTS;
use crate::auth::AccessToken;
use crate::error::FetchError;
use crate::resources::Account;

/// GET `{apiBase}/{segments...}` and return the decoded array verbatim.
///
/// # Errors
///
/// Returns [`FetchError::Request`]; when the server answered with an error
/// description it is available through [`FetchError::description`].
#[instrument(skip(client, token))]
pub async fn fetch_collection<T>(
    client: &ApiClient,
    segments: &[&str],
    token: &AccessToken,
) -> Result<Vec<T>, FetchError>
where
    T: DeserializeOwned,
{
    let url = client.config().api_base.join(segments);

    let items: Vec<T> = client
        .get_authed_no_query(url, token)
        .await
        .map_err(|source| FetchError::Request {
            resource: segments.join("/"),
            source,
        })?;

    debug!(count = items.len(), "Fetched collection");
    Ok(items)
}

/// List the accounts reachable by the token's identity.
pub async fn fetch_accounts(
    client: &ApiClient,
    token: &AccessToken,
) -> Result<Vec<Account>, FetchError> {
    fetch_collection(client, &[ACCOUNTS], token).await
}
