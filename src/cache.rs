use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Default lifetime of a cached upstream response.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// Process-local key/value store whose entries expire a fixed time after
/// insertion. Expiry is checked lazily on read; there is no background sweep
/// and no size bound.
pub struct TtlCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, key: &str) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            if entry.inserted_at.elapsed() <= self.ttl {
                return Some(entry.value.clone());
            }
        }
        // Either absent or stale; drop the stale entry so the map doesn't keep it.
        self.entries
            .remove_if(key, |_, entry| entry.inserted_at.elapsed() > self.ttl);
        None
    }

    /// Store `value` under `key` and hand it back, so callers can write
    /// `cache.put(key, fetch().await?)` as the tail of a fetch.
    pub fn put(&self, key: impl Into<String>, value: V) -> V {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value: value.clone(),
                inserted_at: Instant::now(),
            },
        );
        value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
