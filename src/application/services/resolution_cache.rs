//! Memoizes resolved portraits and remembers URLs known to fail.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, trace};

/// Success map and failure set shared by every resolution in the process.
///
/// Entries never expire; only [`ResolutionCache::clear`] removes them. The
/// failure set holds literal URLs, independent of character and size.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    resolved: RwLock<HashMap<String, String>>,
    failed: RwLock<HashSet<String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Snapshot of cache sizes and lookup counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Resolved (character, size) keys.
    pub cached: usize,
    /// URLs known to fail validation.
    pub failed: usize,
    /// Lookups answered from the success map.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {} resolved, {} failed URLs ({} hits, {} misses)",
            self.cached, self.failed, self.hits, self.misses
        )
    }
}

impl ResolutionCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for a (character, size) request.
    #[must_use]
    pub fn key(id: u64, size: &str) -> String {
        format!("{id}-{size}")
    }

    /// Looks up a resolved URL.
    pub fn get(&self, key: &str) -> Option<String> {
        let found = self.resolved.read().get(key).cloned();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(key = %key, "Resolution cache hit");
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(key = %key, "Resolution cache miss");
        }
        found
    }

    /// Stores a resolved URL, keeping an existing entry if one raced in first.
    ///
    /// Returns the URL now held for `key`.
    pub fn insert(&self, key: String, url: String) -> String {
        let mut resolved = self.resolved.write();
        resolved.entry(key).or_insert(url).clone()
    }

    /// Returns true if `url` already failed validation.
    pub fn is_failed(&self, url: &str) -> bool {
        self.failed.read().contains(url)
    }

    /// Records a URL that failed validation.
    pub fn mark_failed(&self, url: &str) {
        if self.failed.write().insert(url.to_string()) {
            trace!(url = %url, "Marked URL as failed");
        }
    }

    /// Empties both stores and resets the counters.
    pub fn clear(&self) {
        self.resolved.write().clear();
        self.failed.write().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        debug!("Cleared resolution cache");
    }

    /// Current sizes and counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            cached: self.resolved.read().len(),
            failed: self.failed.read().len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
