//! Authenticated access to the API.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::api::ApiClient;
use crate::auth::{AccessToken, AuthProvider, Authenticate, Credentials};
use crate::config::ApiConfig;
use crate::error::Error;
use crate::fetch::{self, PaginatedFetcher, ResourceQuery};
use crate::resources::{Account, Contact};
use crate::types::AccountId;

/// A bearer token bound to an HTTP client.
///
/// Sessions are obtained via [`Session::login()`] (or [`Session::from_token()`]
/// for a token obtained elsewhere). The token is fixed for the lifetime of
/// the session; there is no renewal, so a new session is needed once the
/// server lets the token expire.
///
/// # Thread Safety
///
/// Sessions are cheap to clone (they use internal `Arc`) and hold no mutable
/// state, so they can be shared across tasks freely.
///
/// # Example
///
/// ```no_run
/// use apricot::{ApiConfig, Credentials, Session};
///
/// # async fn example() -> Result<(), apricot::Error> {
/// let creds = Credentials::api_key_only("api-key");
/// let session = Session::login(ApiConfig::default(), &creds).await?;
/// let accounts = session.accounts().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client: ApiClient,
    token: AccessToken,
}

impl Session {
    /// Authenticate with the token endpoint and create a new session.
    ///
    /// # Errors
    ///
    /// Returns an error if both the primary and the fallback exchange fail.
    #[instrument(skip(config, credentials), fields(has_secret = credentials.has_secret()))]
    pub async fn login(config: ApiConfig, credentials: &Credentials) -> Result<Self, Error> {
        let client = ApiClient::new(config)?;
        let provider = AuthProvider::with_client(client.clone());
        Self::authenticate(client, &provider, credentials).await
    }

    /// Create a session using a custom authenticator.
    pub async fn login_with<A>(
        config: ApiConfig,
        authenticator: &A,
        credentials: &Credentials,
    ) -> Result<Self, Error>
    where
        A: Authenticate + ?Sized,
    {
        let client = ApiClient::new(config)?;
        Self::authenticate(client, authenticator, credentials).await
    }

    /// Create a session from a token obtained elsewhere.
    ///
    /// The caller is responsible for ensuring the token is valid.
    pub fn from_token(config: ApiConfig, token: AccessToken) -> Result<Self, Error> {
        Ok(Self::new(ApiClient::new(config)?, token))
    }

    async fn authenticate<A>(
        client: ApiClient,
        authenticator: &A,
        credentials: &Credentials,
    ) -> Result<Self, Error>
    where
        A: Authenticate + ?Sized,
    {
        info!("Creating new session");
        let token = authenticator.authenticate(credentials).await?;
        debug!("Session created successfully");
        Ok(Self::new(client, token))
    }

    fn new(client: ApiClient, token: AccessToken) -> Self {
        Self {
            inner: Arc::new(SessionInner { client, token }),
        }
    }

    /// Returns the session's bearer token.
    pub fn token(&self) -> &AccessToken {
        &self.inner.token
    }

    /// Returns the HTTP client used by this session.
    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    /// List the accounts reachable by the authenticated identity.
    pub async fn accounts(&self) -> Result<Vec<Account>, Error> {
        debug!("Listing accounts");
        Ok(fetch::fetch_accounts(&self.inner.client, &self.inner.token).await?)
    }

    /// Fetch all non-archived contacts of an account using the default
    /// projection (first name, last name, email).
    pub async fn contacts(&self, account_id: &AccountId) -> Result<Vec<Contact>, Error> {
        self.fetch_all(account_id, &ResourceQuery::contacts()).await
    }

    /// Fetch every page of an account-scoped resource.
    pub async fn fetch_all<T>(
        &self,
        account_id: &AccountId,
        query: &ResourceQuery,
    ) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
    {
        let fetcher = PaginatedFetcher::new(self.inner.client.clone());
        Ok(fetcher
            .fetch_all(account_id, &self.inner.token, query)
            .await?)
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api_base", &self.inner.client.config().api_base)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
