use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::config::QueryConfig;

/// Hierarchical cache key, e.g. `["profile", "mfa", "factors"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Per-subscriber options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// When false the fetcher is never called; cached data is still returned.
    pub enabled: bool,
    /// How long a fetched value counts as fresh for this subscriber.
    pub stale_time: Duration,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            stale_time: Duration::ZERO,
        }
    }
}

impl QueryOptions {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }
}

/// Options applied to the whole cache at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    pub max_capacity: u64,
    /// Entries not read for this long are evicted.
    pub gc_time: Duration,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self::from(&QueryConfig::default())
    }
}

impl From<&QueryConfig> for CacheOptions {
    fn from(config: &QueryConfig) -> Self {
        Self {
            max_capacity: config.max_capacity(),
            gc_time: config.gc_time(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Disabled query with nothing cached.
    Idle,
    Success,
    Error,
}

/// Snapshot handed back to a subscriber.
#[derive(Debug)]
pub struct QueryResult<V, E> {
    pub status: QueryStatus,
    pub data: Option<Arc<V>>,
    pub error: Option<E>,
    /// When `data` was fetched.
    pub updated_at: Option<Instant>,
    /// True when `data` is older than the subscriber's stale time.
    pub is_stale: bool,
}

impl<V, E> QueryResult<V, E> {
    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }

    pub fn is_idle(&self) -> bool {
        self.status == QueryStatus::Idle
    }

    /// Convert into a plain `Result`, dropping any stale data kept alongside an error.
    pub fn into_result(self) -> Result<Option<Arc<V>>, E> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_key_display() {
        let key = QueryKey::new(["profile", "mfa", "factors"]);
        assert_eq!(key.to_string(), "[profile, mfa, factors]");
        assert_ne!(key, QueryKey::new(["profile", "mfa"]));
    }

    #[test]
    fn test_query_options_builders() {
        let options = QueryOptions::default()
            .with_enabled(false)
            .with_stale_time(Duration::from_secs(60));
        assert!(!options.enabled);
        assert_eq!(options.stale_time, Duration::from_secs(60));
    }

    #[test]
    fn test_into_result_prefers_error() {
        let result: QueryResult<u32, String> = QueryResult {
            status: QueryStatus::Error,
            data: Some(Arc::new(1)),
            error: Some("boom".to_string()),
            updated_at: None,
            is_stale: true,
        };
        assert_eq!(result.into_result().unwrap_err(), "boom");
    }
}
