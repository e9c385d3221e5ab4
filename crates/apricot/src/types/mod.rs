//! Validated identifier and URL types.

mod account_id;
mod service_url;

pub use account_id::AccountId;
pub use service_url::ServiceUrl;
