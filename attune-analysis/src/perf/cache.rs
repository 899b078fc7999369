//! Bounded in-memory key-value cache with per-entry TTL and LRU eviction.
//!
//! TTL is checked lazily on `get` rather than by a background sweep; the
//! cache lives for one orchestration run, so expired entries are evicted
//! by the access that discovers them. Eviction is by least-recent *access*
//! (not insertion), so detectors that keep getting re-read survive even
//! when they were cached early.
//!
//! Keys follow the `"<namespace>:<key>"` convention to support
//! `clear_namespace`.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use attune_core::constants::DEFAULT_CACHE_CAPACITY;
use attune_core::FxHashMap;
use serde::Serialize;

/// One cached value. Owned exclusively by the cache map; values leave
/// the cache only by clone (copy-out).
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
    last_accessed_at: Instant,
}

/// Hit/miss counters and current size, for the performance summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

struct CacheState<V> {
    entries: FxHashMap<String, CacheEntry<V>>,
    hits: u64,
    misses: u64,
}

/// Thread-safe bounded TTL+LRU cache.
///
/// All operations take the single internal lock, so a capacity check and
/// the insert it guards are atomic with respect to concurrent `get`/`set`.
pub struct TtlLruCache<V> {
    state: Mutex<CacheState<V>>,
    capacity: usize,
}

impl<V: Clone> TtlLruCache<V> {
    /// Create a cache with the default capacity (100 entries).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache holding at most `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: FxHashMap::default(),
                hits: 0,
                misses: 0,
            }),
            capacity: capacity.max(1),
        }
    }

    /// Insert or overwrite an entry. Inserting a *new* key at capacity
    /// first evicts the entry with the oldest `last_accessed_at`.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        let now = Instant::now();
        if let Ok(mut state) = self.state.lock() {
            if !state.entries.contains_key(&key) && state.entries.len() >= self.capacity {
                let evict = state
                    .entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.last_accessed_at)
                    .map(|(k, _)| k.clone());
                if let Some(evict) = evict {
                    tracing::debug!(key = %evict, "evicting least-recently-accessed cache entry");
                    state.entries.remove(&evict);
                }
            }
            state.entries.insert(
                key,
                CacheEntry {
                    value,
                    expires_at: now + ttl,
                    last_accessed_at: now,
                },
            );
        }
    }

    /// Look up a key. Returns `None` for missing or expired entries;
    /// expired entries are removed by the access that discovers them.
    /// A hit refreshes `last_accessed_at`, which is what makes eviction
    /// LRU rather than insertion-order FIFO.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let Ok(mut guard) = self.state.lock() else {
            return None;
        };
        let state = &mut *guard;

        let expired = match state.entries.get(key) {
            Some(entry) => now > entry.expires_at,
            None => {
                state.misses += 1;
                return None;
            }
        };
        if expired {
            state.entries.remove(key);
            state.misses += 1;
            return None;
        }

        let value = state.entries.get_mut(key).map(|entry| {
            entry.last_accessed_at = now;
            entry.value.clone()
        });
        state.hits += 1;
        value
    }

    /// Remove every entry; returns how many were removed.
    pub fn clear_all(&self) -> usize {
        if let Ok(mut state) = self.state.lock() {
            let removed = state.entries.len();
            state.entries.clear();
            removed
        } else {
            0
        }
    }

    /// Remove every entry whose key starts with `prefix`; returns how
    /// many were removed.
    pub fn clear_namespace(&self, prefix: &str) -> usize {
        if let Ok(mut state) = self.state.lock() {
            let before = state.entries.len();
            state.entries.retain(|key, _| !key.starts_with(prefix));
            before - state.entries.len()
        } else {
            0
        }
    }

    /// Number of entries currently stored (expired-but-unaccessed included).
    pub fn len(&self) -> usize {
        self.state.lock().map(|s| s.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hit/miss counters accumulated over this cache's lifetime.
    pub fn stats(&self) -> CacheStats {
        self.state
            .lock()
            .map(|s| CacheStats {
                hits: s.hits,
                misses: s.misses,
                entries: s.entries.len(),
            })
            .unwrap_or_default()
    }
}

impl<V: Clone> Default for TtlLruCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
