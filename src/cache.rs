//! Bounded, time-limited memo of recent query results.
//!
//! Per-keystroke search means the same queries arrive in bursts; this cache
//! short-circuits the repeats. Three deliberate simplifications:
//!
//! - **FIFO eviction, not LRU**: when full, the oldest-inserted entry goes.
//!   Refreshing an existing key keeps its place in line.
//! - **Lazy expiry**: entries past the TTL are only discarded when read.
//! - **Minimum query length**: one- and two-character queries are cheap
//!   index probes and would churn the 50 slots, so they bypass the cache
//!   entirely.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use crate::types::SearchResults;

/// How many distinct queries are remembered.
pub const CACHE_CAPACITY: usize = 50;

/// How long a cached result stays valid.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Normalized queries shorter than this (in chars) are never cached.
pub const MIN_CACHED_QUERY_LEN: usize = 3;

#[derive(Debug, Clone)]
struct CacheEntry {
    results: SearchResults,
    created: Instant,
}

/// Insertion-ordered result cache.
#[derive(Debug)]
pub struct QueryCache {
    entries: HashMap<String, CacheEntry>,
    order: VecDeque<String>,
    capacity: usize,
    ttl: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        QueryCache::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        QueryCache::with_config(CACHE_CAPACITY, CACHE_TTL)
    }

    /// Custom capacity and TTL, for tests and tuning.
    pub fn with_config(capacity: usize, ttl: Duration) -> Self {
        QueryCache {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
            ttl,
        }
    }

    /// Should results for this normalized query be cached at all?
    #[inline]
    pub fn is_cacheable(normalized_query: &str) -> bool {
        normalized_query.chars().count() >= MIN_CACHED_QUERY_LEN
    }

    /// Cached results for `key`, unless absent or expired. Expired entries
    /// are discarded on the spot.
    pub fn get(&mut self, key: &str) -> Option<SearchResults> {
        let expired = match self.entries.get(key) {
            None => return None,
            Some(entry) => entry.created.elapsed() > self.ttl,
        };
        if expired {
            self.entries.remove(key);
            self.order.retain(|queued| queued != key);
            return None;
        }
        self.entries.get(key).map(|entry| entry.results.clone())
    }

    /// Store results under `key`. An existing key is refreshed in place;
    /// a new key may first evict the oldest-inserted entry.
    pub fn set(&mut self, key: String, results: SearchResults) {
        let entry = CacheEntry {
            results,
            created: Instant::now(),
        };
        if self.entries.contains_key(&key) {
            self.entries.insert(key, entry);
            return;
        }
        while self.entries.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, entry);
    }

    /// Drop every entry (catalog swap, manual invalidation).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Number of live entries (expired-but-unread ones included).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
