//! Authentication types and the token exchange.
//!
//! [`AuthProvider`] turns [`Credentials`] into an [`AccessToken`] using the
//! OAuth client-credentials grant. The [`Authenticate`] trait is the seam
//! through which a [`Session`](crate::Session) obtains its token.

mod credentials;
mod provider;
mod scheme;
mod tokens;

use async_trait::async_trait;

use crate::error::AuthenticationError;

pub use credentials::Credentials;
pub use provider::{AuthProvider, TokenGrant};
pub use scheme::CredentialScheme;
pub use tokens::AccessToken;

/// Something that can exchange credentials for a bearer token.
#[async_trait]
pub trait Authenticate: Send + Sync {
    /// Obtain a fresh access token for the given credentials.
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, AuthenticationError>;
}
