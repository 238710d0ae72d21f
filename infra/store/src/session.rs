use crate::error::StoreError;
use moka::sync::Cache;
use private::Sealed;
use std::fmt;
use std::time::Duration;
use tracing::trace;

const DEFAULT_CAPACITY: u64 = 10_000;

/// Per-key state that expires after a period without access.
///
/// Reads and writes both count as access, so an entry stays alive for as long
/// as its owner keeps interacting with it. Once `max_capacity` is reached the
/// least valuable entries are evicted first.
#[derive(Clone)]
pub struct SessionCache<V> {
    cache: Cache<String, V>,
    time_to_idle: Duration,
}

impl<V: Clone + Send + Sync + 'static> SessionCache<V> {
    #[must_use]
    pub fn builder() -> SessionCacheBuilder<NoIdle> {
        SessionCacheBuilder::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        trace!(key = %key, "Session stored");
        self.cache.insert(key, value);
    }

    /// Drops the entry, returning whether one was present.
    pub fn remove(&self, key: &str) -> bool {
        self.cache.remove(key).is_some()
    }
}

impl<V: Clone + Send + Sync + 'static> fmt::Debug for SessionCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCache")
            .field("time_to_idle", &self.time_to_idle)
            .field("max_capacity", &self.cache.policy().max_capacity())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct NoIdle;
#[derive(Debug)]
pub struct WithIdle(Duration);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoIdle {}
impl Sealed for WithIdle {}

#[allow(private_bounds)]
#[derive(Debug)]
pub struct SessionCacheBuilder<S: Sealed = NoIdle> {
    state: S,
    max_capacity: u64,
}

impl Default for SessionCacheBuilder<NoIdle> {
    fn default() -> Self {
        Self { state: NoIdle, max_capacity: DEFAULT_CAPACITY }
    }
}

#[allow(private_bounds)]
impl<S: Sealed> SessionCacheBuilder<S> {
    #[must_use = "Sets the maximum number of live sessions"]
    pub const fn max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }
}

impl SessionCacheBuilder<NoIdle> {
    #[must_use = "Sets how long an untouched session survives"]
    pub const fn time_to_idle(self, ttl: Duration) -> SessionCacheBuilder<WithIdle> {
        SessionCacheBuilder { state: WithIdle(ttl), max_capacity: self.max_capacity }
    }
}

impl SessionCacheBuilder<WithIdle> {
    /// Creates the cache.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidConfiguration`] when the idle period or the
    /// capacity is zero, since no session could ever be read back.
    pub fn build<V: Clone + Send + Sync + 'static>(self) -> Result<SessionCache<V>, StoreError> {
        let WithIdle(ttl) = self.state;
        if ttl.is_zero() {
            return Err(StoreError::InvalidConfiguration {
                message: "time_to_idle must be greater than zero".into(),
                context: None,
            });
        }
        if self.max_capacity == 0 {
            return Err(StoreError::InvalidConfiguration {
                message: "max_capacity must be greater than zero".into(),
                context: None,
            });
        }

        let cache = Cache::builder().max_capacity(self.max_capacity).time_to_idle(ttl).build();
        Ok(SessionCache { cache, time_to_idle: ttl })
    }
}
