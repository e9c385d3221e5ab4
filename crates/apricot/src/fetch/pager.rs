//! Continuation-token pagination.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::api::ApiClient;
use crate::api::endpoints::{ACCOUNTS, PageQuery, PageResponse};
use crate::auth::AccessToken;
use crate::config::PageLimit;
use crate::error::{FetchError, RequestError};
use crate::types::AccountId;

use super::ResourceQuery;

/// Fetches every page of an account-scoped collection.
///
/// Pages are requested one at a time; each request carries the continuation
/// token of the previous response. Items are concatenated in the order the
/// server returned them. The loop ends when a response has no (or an empty)
/// continuation token, or fails once the configured [`PageLimit`] is hit.
#[derive(Debug, Clone)]
pub struct PaginatedFetcher {
    client: ApiClient,
    limit: PageLimit,
}

impl PaginatedFetcher {
    /// Create a fetcher using the page limit from the client's configuration.
    pub fn new(client: ApiClient) -> Self {
        let limit = client.config().page_limit;
        Self { client, limit }
    }

    /// Override the page limit.
    pub fn with_limit(mut self, limit: PageLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Returns the active page limit.
    pub fn limit(&self) -> PageLimit {
        self.limit
    }

    /// Fetch all pages of `query` for the given account.
    ///
    /// # Errors
    ///
    /// Any failed page aborts the whole aggregation: pages already fetched
    /// are dropped and the [`FetchError`] is returned.
    #[instrument(skip(self, token, query), fields(account = %account_id, resource = %query.resource()))]
    pub async fn fetch_all<T>(
        &self,
        account_id: &AccountId,
        token: &AccessToken,
        query: &ResourceQuery,
    ) -> Result<Vec<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = self.client.config().api_base.join(&[
            ACCOUNTS,
            account_id.as_str(),
            query.resource(),
        ]);

        let started = Instant::now();
        let mut items = Vec::new();
        let mut continuation: Option<String> = None;
        let mut pages: u32 = 0;

        loop {
            let params = PageQuery {
                async_mode: false,
                select: query.select(),
                filter: query.filter(),
                continuation_token: continuation.as_deref(),
            };

            let page: PageResponse = self
                .client
                .get_authed(url.clone(), &params, token)
                .await
                .map_err(|source| FetchError::Request {
                    resource: query.resource().to_string(),
                    source,
                })?;
            pages += 1;

            let next = page.next_token().map(str::to_owned);
            let page_items: Vec<T> = take_items(page.fields, query)?;
            debug!(
                page = pages,
                items = page_items.len(),
                more = next.is_some(),
                "Fetched page"
            );
            items.extend(page_items);

            match next {
                Some(next_token) => {
                    self.check_limit(pages, started)?;
                    continuation = Some(next_token);
                }
                None => break,
            }
        }

        info!(pages, total = items.len(), "Collection fetched");
        Ok(items)
    }

    /// Called before requesting page `pages + 1`.
    fn check_limit(&self, pages: u32, started: Instant) -> Result<(), FetchError> {
        if let Some(max_pages) = self.limit.max_pages
            && pages >= max_pages
        {
            warn!(pages, "Page limit reached with continuation token outstanding");
            return Err(FetchError::PaginationLimitExceeded { pages });
        }

        if let Some(max_elapsed) = self.limit.max_elapsed {
            let elapsed = started.elapsed();
            if elapsed >= max_elapsed {
                warn!(pages, ?elapsed, "Time limit reached with continuation token outstanding");
                return Err(FetchError::PaginationTimeExceeded {
                    pages,
                    elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                });
            }
        }

        Ok(())
    }
}

/// Pull the item array out of a page and decode it.
fn take_items<T: DeserializeOwned>(
    mut fields: Map<String, Value>,
    query: &ResourceQuery,
) -> Result<Vec<T>, FetchError> {
    match fields.remove(query.items_field()) {
        Some(value @ Value::Array(_)) => {
            serde_json::from_value(value).map_err(|e| FetchError::Request {
                resource: query.resource().to_string(),
                source: RequestError::MalformedResponse {
                    message: e.to_string(),
                },
            })
        }
        _ => Err(FetchError::MissingItems {
            resource: query.resource().to_string(),
            field: query.items_field().to_string(),
        }),
    }
}
