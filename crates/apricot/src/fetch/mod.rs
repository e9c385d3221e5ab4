//! Collection retrieval.
//!
//! [`PaginatedFetcher`] follows continuation tokens until a collection is
//! exhausted; [`fetch_collection`] and [`fetch_accounts`] cover resources
//! returned in a single response.

mod pager;
mod query;
mod single;

pub use pager::PaginatedFetcher;
pub use query::ResourceQuery;
pub use single::{fetch_accounts, fetch_collection};
