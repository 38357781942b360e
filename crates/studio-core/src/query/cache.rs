use std::fmt::{Debug, Display};
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use moka::ops::compute::{CompResult, Op};
use tokio::time::Instant;

use super::types::{CacheOptions, QueryOptions, QueryResult, QueryStatus};

/// Cached value plus the moment it was fetched.
struct Cached<V> {
    value: Arc<V>,
    fetched_at: Instant,
}

impl<V> Clone for Cached<V> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            fetched_at: self.fetched_at,
        }
    }
}

impl<V> Cached<V> {
    fn is_stale(&self, stale_time: Duration) -> bool {
        self.fetched_at.elapsed() >= stale_time
    }
}

/// Shared read-through cache.
///
/// Cloning is cheap; clones share storage and in-flight fetches.
pub struct QueryCache<K, V> {
    inner: Cache<K, Cached<V>>,
}

impl<K, V> Clone for QueryCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Debug for QueryCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("entry_count", &self.inner.entry_count())
            .finish()
    }
}

impl<K, V> Default for QueryCache<K, V>
where
    K: Hash + Eq + Clone + Display + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}

impl<K, V> QueryCache<K, V>
where
    K: Hash + Eq + Clone + Display + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    pub fn new(options: CacheOptions) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(options.max_capacity)
                .time_to_idle(options.gc_time)
                .build(),
        }
    }

    /// Return the cached value for `key`, fetching it when missing or stale.
    ///
    /// Concurrent callers for the same key share one call to `fetcher`.
    /// Errors are never cached; when a refetch of stale data fails, the
    /// stale value stays cached and is returned alongside the error.
    pub async fn fetch<E, F, Fut>(&self, key: &K, options: QueryOptions, fetcher: F) -> QueryResult<V, E>
    where
        E: Clone + Display + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let cached = self.inner.get(key).await;

        if !options.enabled {
            tracing::debug!(event = "core.query.disabled", key = %key);
            return match cached {
                Some(entry) => success(&entry, options.stale_time),
                None => idle(),
            };
        }

        if let Some(entry) = &cached
            && !entry.is_stale(options.stale_time)
        {
            tracing::debug!(event = "core.query.cache_hit", key = %key);
            return success(entry, options.stale_time);
        }

        // Computations on one key are serialized, so a caller queued behind a
        // refetch sees the fresh entry and leaves it alone. A failed fetch
        // leaves the previous entry in place.
        let stale_time = options.stale_time;
        let computed = self
            .inner
            .entry(key.clone())
            .and_try_compute_with(|current| async move {
                if let Some(current) = current
                    && !current.value().is_stale(stale_time)
                {
                    return Ok(Op::Nop);
                }

                tracing::info!(event = "core.query.fetch_started", key = %key);
                let value = fetcher().await?;
                Ok::<_, E>(Op::Put(Cached {
                    value: Arc::new(value),
                    fetched_at: Instant::now(),
                }))
            })
            .await;

        match computed {
            Ok(CompResult::Inserted(entry) | CompResult::ReplacedWith(entry)) => {
                tracing::info!(event = "core.query.fetch_completed", key = %key);
                success(entry.value(), stale_time)
            }
            Ok(CompResult::Unchanged(entry)) => {
                tracing::debug!(event = "core.query.cache_hit", key = %key);
                success(entry.value(), stale_time)
            }
            Ok(CompResult::Removed(_) | CompResult::StillNone(_)) => idle(),
            Err(e) => {
                tracing::warn!(
                    event = "core.query.fetch_failed",
                    key = %key,
                    error = %e
                );
                let kept = self.inner.get(key).await.or(cached);
                QueryResult {
                    status: QueryStatus::Error,
                    data: kept.as_ref().map(|c| Arc::clone(&c.value)),
                    error: Some(e),
                    updated_at: kept.as_ref().map(|c| c.fetched_at),
                    is_stale: kept.is_some(),
                }
            }
        }
    }

    /// Cached value without fetching, regardless of staleness.
    pub async fn peek(&self, key: &K) -> Option<Arc<V>> {
        self.inner.get(key).await.map(|entry| entry.value)
    }

    /// Drop one entry. The next subscriber refetches.
    pub async fn invalidate(&self, key: &K) {
        tracing::info!(event = "core.query.invalidated", key = %key);
        self.inner.invalidate(key).await;
    }

    /// Drop every entry.
    pub fn invalidate_all(&self) {
        tracing::info!(event = "core.query.invalidated_all");
        self.inner.invalidate_all();
    }
}

fn idle<V, E>() -> QueryResult<V, E> {
    QueryResult {
        status: QueryStatus::Idle,
        data: None,
        error: None,
        updated_at: None,
        is_stale: false,
    }
}

fn success<V, E>(entry: &Cached<V>, stale_time: Duration) -> QueryResult<V, E> {
    QueryResult {
        status: QueryStatus::Success,
        data: Some(Arc::clone(&entry.value)),
        error: None,
        updated_at: Some(entry.fetched_at),
        is_stale: entry.is_stale(stale_time),
    }
}
