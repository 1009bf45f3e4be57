//! Compiled pattern cache
//!
//! Regex patterns arrive as strings from the template layer and are
//! compiled once, then shared across requests through a pluggable backing
//! store.

mod store;

pub use store::{LruPatternStore, MemoryPatternStore, PatternStore, Ttl};

use regex::Regex;
use std::sync::Arc;

use crate::error::Result;

/// Process-wide cache of compiled patterns, keyed by pattern source.
///
/// Concurrent calls for the same source may race to compile; the last
/// writer wins. The store carries no per-key locking, so at-most-one
/// compile is not guaranteed. Both racers return an equivalent pattern.
pub struct PatternCache {
    store: Arc<dyn PatternStore>,
    ttl: Ttl,
}

impl PatternCache {
    /// Cache backed by an unbounded in-memory store with no expiry
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryPatternStore::new()), Ttl::Forever)
    }

    /// Cache backed by the given store, storing entries with the given
    /// lifetime
    pub fn with_store(store: Arc<dyn PatternStore>, ttl: Ttl) -> Self {
        Self { store, ttl }
    }

    /// Return the compiled pattern for `source`, compiling and storing it
    /// on a miss.
    ///
    /// # Errors
    ///
    /// [`Error::PatternCompilation`](crate::Error::PatternCompilation) when
    /// `source` is not a valid regex. Failed compiles are never stored.
    pub fn get_or_compile(&self, source: &str) -> Result<Arc<Regex>> {
        if let Some(pattern) = self.store.get(source) {
            return Ok(pattern);
        }

        let pattern = Arc::new(Regex::new(source)?);
        self.store.put(source, pattern.clone(), self.ttl);

        Ok(pattern)
    }

    /// Cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.store.len(),
        }
    }

    /// Drop all cached patterns
    pub fn clear(&self) {
        self.store.clear();
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of cached patterns
    pub size: usize,
}
