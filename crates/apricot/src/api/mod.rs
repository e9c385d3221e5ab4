//! HTTP client for the token endpoint and the REST API.

mod client;
pub(crate) mod endpoints;

pub use client::ApiClient;
