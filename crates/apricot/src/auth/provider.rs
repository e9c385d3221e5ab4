//! Token exchange against the OAuth token endpoint.

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::api::ApiClient;
use crate::config::{ApiConfig, FallbackPolicy};
use crate::error::{AuthenticationError, Error, RequestError};

use super::{AccessToken, Authenticate, CredentialScheme, Credentials};

/// Outcome of a successful token exchange.
#[derive(Debug, Clone)]
pub struct TokenGrant {
    /// The bearer token.
    pub access_token: AccessToken,
    /// The scheme whose exchange succeeded.
    pub scheme: CredentialScheme,
    /// True if the primary exchange failed and the API-key fallback succeeded.
    pub fell_back: bool,
    /// Token lifetime in seconds, as reported by the server.
    pub expires_in: Option<u64>,
}

/// Exchanges application credentials for bearer tokens.
///
/// With a client secret, the `<apiKey>:<clientSecret>` scheme is tried first
/// and the `APIKEY:<apiKey>` scheme is the single fallback. Without a secret
/// the API-key scheme is used directly. Tokens are never cached: every call
/// performs a fresh exchange.
#[derive(Debug, Clone)]
pub struct AuthProvider {
    client: ApiClient,
}

impl AuthProvider {
    /// Create a provider with its own HTTP client.
    pub fn new(config: ApiConfig) -> Result<Self, Error> {
        Ok(Self::with_client(ApiClient::new(config)?))
    }

    /// Create a provider sharing an existing HTTP client.
    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token, falling back to the API-key scheme
    /// if the client-secret exchange fails.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError`] carrying the failure of the last
    /// attempt when no exchange succeeded.
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, AuthenticationError> {
        self.grant(credentials).await.map(|grant| grant.access_token)
    }

    /// Like [`authenticate`](Self::authenticate), but reports which scheme
    /// produced the token.
    #[instrument(skip(self, credentials), fields(has_secret = credentials.has_secret()))]
    pub async fn grant(&self, credentials: &Credentials) -> Result<TokenGrant, AuthenticationError> {
        let primary = CredentialScheme::primary_for(credentials);

        let primary_error = match self.exchange(credentials, primary).await {
            Ok(grant) => return Ok(grant),
            Err(err) if primary == CredentialScheme::ApiKey => return Err(err),
            Err(err) => err,
        };

        if !self.should_fall_back(&primary_error) {
            return Err(primary_error);
        }

        warn!(
            error = %primary_error,
            "Authentication with client secret failed, trying API key only"
        );

        let mut grant = self.exchange(credentials, CredentialScheme::ApiKey).await?;
        grant.fell_back = true;
        Ok(grant)
    }

    /// Perform a single exchange with an explicitly chosen scheme.
    ///
    /// No fallback is attempted.
    pub async fn authenticate_with(
        &self,
        credentials: &Credentials,
        scheme: CredentialScheme,
    ) -> Result<AccessToken, AuthenticationError> {
        self.exchange(credentials, scheme)
            .await
            .map(|grant| grant.access_token)
    }

    async fn exchange(
        &self,
        credentials: &Credentials,
        scheme: CredentialScheme,
    ) -> Result<TokenGrant, AuthenticationError> {
        debug!(%scheme, "Requesting access token");

        let authorization = scheme
            .basic_header(credentials)
            .ok_or(AuthenticationError::MissingSecret { scheme })?;

        let response = self
            .client
            .request_token(&authorization)
            .await
            .map_err(|source| AuthenticationError::Exchange { scheme, source })?;

        let access_token = response
            .access_token
            .filter(|token| !token.is_empty())
            .map(AccessToken::new)
            .ok_or_else(|| AuthenticationError::Exchange {
                scheme,
                source: RequestError::MalformedResponse {
                    message: "token response has no access_token".to_string(),
                },
            })?;

        info!(%scheme, token_type = ?response.token_type, "Access token obtained");

        Ok(TokenGrant {
            access_token,
            scheme,
            fell_back: false,
            expires_in: response.expires_in,
        })
    }

    fn should_fall_back(&self, err: &AuthenticationError) -> bool {
        match self.client.config().fallback {
            FallbackPolicy::AnyFailure => true,
            FallbackPolicy::CredentialRejection => matches!(
                err,
                AuthenticationError::Exchange { source, .. } if source.is_credential_rejection()
            ),
        }
    }
}

#[async_trait]
impl Authenticate for AuthProvider {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, AuthenticationError> {
        AuthProvider::authenticate(self, credentials).await
    }
}
