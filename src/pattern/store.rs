//! Backing stores for compiled patterns

use dashmap::DashMap;
use lru::LruCache;
use parking_lot::Mutex;
use regex::Regex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Lifetime of a cached pattern.
///
/// The default is `Forever`: the original contract passes a zero expiry to
/// the host cache, meaning entries never expire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ttl {
    /// Never expires
    #[default]
    Forever,
    /// Expires after the given duration
    After(Duration),
}

/// Pluggable backing store for compiled patterns.
///
/// Injected into [`PatternCache`](super::PatternCache) as a collaborator;
/// the store decides lifetime and capacity policy.
pub trait PatternStore: Send + Sync {
    /// Fetch the compiled pattern stored under `key`, if present and live
    fn get(&self, key: &str) -> Option<Arc<Regex>>;

    /// Store a compiled pattern under `key` with the given lifetime
    fn put(&self, key: &str, pattern: Arc<Regex>, ttl: Ttl);

    /// Number of stored entries
    fn len(&self) -> usize;

    /// Whether the store is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries
    fn clear(&self);
}

/// Cached entry with its expiry policy
struct CachedPattern {
    pattern: Arc<Regex>,
    cached_at: Instant,
    ttl: Ttl,
}

impl CachedPattern {
    fn new(pattern: Arc<Regex>, ttl: Ttl) -> Self {
        Self {
            pattern,
            cached_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        match self.ttl {
            Ttl::Forever => false,
            Ttl::After(ttl) => self.cached_at.elapsed() > ttl,
        }
    }
}

/// Unbounded in-memory store (thread-safe, lock-free reads).
///
/// Faithful to the original's indefinite caching; with `Ttl::Forever` the
/// store grows with the number of distinct pattern sources. Use
/// [`LruPatternStore`] when that is a concern.
#[derive(Default)]
pub struct MemoryPatternStore {
    entries: DashMap<String, CachedPattern>,
}

impl MemoryPatternStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatternStore for MemoryPatternStore {
    fn get(&self, key: &str) -> Option<Arc<Regex>> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                drop(entry);
                self.entries.remove(key);
                return None;
            }
            return Some(entry.pattern.clone());
        }
        None
    }

    fn put(&self, key: &str, pattern: Arc<Regex>, ttl: Ttl) {
        self.entries
            .insert(key.to_string(), CachedPattern::new(pattern, ttl));
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&self) {
        self.entries.clear();
    }
}

/// Bounded in-memory store with least-recently-used eviction.
///
/// Trades the original's unbounded lifetime for a capacity limit; expired
/// entries are dropped on access like the unbounded store.
pub struct LruPatternStore {
    entries: Mutex<LruCache<String, CachedPattern>>,
}

impl LruPatternStore {
    /// Create a store holding at most `capacity` patterns
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }
}

impl PatternStore for LruPatternStore {
    fn get(&self, key: &str) -> Option<Arc<Regex>> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => return Some(entry.pattern.clone()),
            Some(_) => {}
            None => return None,
        }
        // Expired entry is dropped on access
        entries.pop(key);
        None
    }

    fn put(&self, key: &str, pattern: Arc<Regex>, ttl: Ttl) {
        self.entries
            .lock()
            .put(key.to_string(), CachedPattern::new(pattern, ttl));
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }

    fn clear(&self) {
        self.entries.lock().clear();
    }
}
