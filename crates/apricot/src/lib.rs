//! apricot - Wild Apricot API client
//!
//! This library exchanges application credentials for a bearer token and
//! retrieves account-scoped collections (contacts, events, ...) by following
//! the service's continuation tokens until the collection is exhausted.
//! Most callers go through a [`Session`] object.
//!
//! # Example
//!
//! ```no_run
//! use apricot::{AccountId, ApiConfig, Credentials, Session};
//!
//! # async fn example() -> Result<(), apricot::Error> {
//! let credentials = Credentials::new("api-key", Some("client-secret"));
//! let session = Session::login(ApiConfig::default(), &credentials).await?;
//!
//! for account in session.accounts().await? {
//!     println!("{}: {}", account.id, account.name);
//! }
//!
//! let contacts = session.contacts(&AccountId::new("12345")?).await?;
//! println!("retrieved {} contacts", contacts.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod fetch;
pub mod resources;
pub mod session;
pub mod types;

// Re-export primary types at crate root for convenience
pub use api::ApiClient;
pub use auth::{AccessToken, AuthProvider, Authenticate, CredentialScheme, Credentials, TokenGrant};
pub use config::{ApiConfig, FallbackPolicy, PageLimit};
pub use error::{AuthenticationError, Error, FetchError};
pub use fetch::{PaginatedFetcher, ResourceQuery};
pub use resources::{Account, Contact};
pub use session::Session;
pub use types::{AccountId, ServiceUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
