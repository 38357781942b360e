//! Read-through query cache.
//!
//! A thin layer over `moka::future::Cache` that adds per-call staleness,
//! an `enabled` switch and coalesced fetches for concurrent subscribers.

pub mod cache;
pub mod types;

pub use cache::QueryCache;
pub use types::{CacheOptions, QueryKey, QueryOptions, QueryResult, QueryStatus};
