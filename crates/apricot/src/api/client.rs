//! HTTP client shared by authentication and the fetchers.

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};
use url::Url;

use crate::auth::AccessToken;
use crate::config::ApiConfig;
use crate::error::{Error, ProtocolError, RequestError, TransportError};

use super::endpoints::{ErrorResponse, TokenRequest, TokenResponse};

/// HTTP client for the token endpoint and the REST API.
///
/// Cheap to clone; clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: Arc<ApiConfig>,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TransportError::from)?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POST a client-credentials token request with the given Basic
    /// `Authorization` header value.
    #[instrument(skip(self, authorization), fields(url = %self.config.token_url))]
    pub(crate) async fn request_token(
        &self,
        authorization: &str,
    ) -> Result<TokenResponse, RequestError> {
        debug!("Token request");

        let response = self
            .client
            .post(self.config.token_url.as_url().clone())
            .header(AUTHORIZATION, authorization)
            .form(&TokenRequest::default())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make an authenticated GET request with query parameters.
    #[instrument(skip(self, url, params, token), fields(url = %url))]
    pub(crate) async fn get_authed<Q, R>(
        &self,
        url: Url,
        params: &Q,
        token: &AccessToken,
    ) -> Result<R, RequestError>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!("Authenticated GET");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(url)
            .query(params)
            .header(AUTHORIZATION, token.bearer())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make an authenticated GET request without query parameters.
    #[instrument(skip(self, url, token), fields(url = %url))]
    pub(crate) async fn get_authed_no_query<R>(
        &self,
        url: Url,
        token: &AccessToken,
    ) -> Result<R, RequestError>
    where
        R: DeserializeOwned,
    {
        debug!("Authenticated GET");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, token.bearer())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, RequestError> {
        let status = response.status();
        trace!(status = %status, "HTTP response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            let error = self.parse_error_response(response).await;
            Err(RequestError::Protocol(error))
        }
    }

    /// Parse an error response from either the token endpoint or the API.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<ErrorResponse>().await {
            Ok(body) => {
                ProtocolError::new(status, body.error, body.error_description.or(body.message))
            }
            Err(_) => ProtocolError::new(status, None, None),
        }
    }
}
