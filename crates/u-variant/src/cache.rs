//! Response caching for generated variant lists.
//!
//! Generation is pure, so a cache is only ever a shortcut: a miss simply
//! recomputes. The engine core never sees the cache; [`Engine`] consults a
//! `dyn VariantCache` at the boundary, and callers pick the implementation:
//!
//! - [`TtlCache`] bounded LRU with per-entry expiry
//! - [`NoCache`] never stores anything
//!
//! Two concurrent misses on the same key both compute and the later `put`
//! wins. That costs a duplicate computation, never a wrong answer.
//!
//! [`Engine`]: crate::engine::Engine

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;
use tracing::trace;

use crate::variant::Variant;

/// A shared, immutable variant list.
pub type Variants = Arc<[Variant]>;

/// Cache key: resolved style, trimmed input text, clamped count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub style: &'static str,
    pub text: String,
    pub count: usize,
}

impl CacheKey {
    #[must_use]
    pub fn new(style: &'static str, text: &str, count: usize) -> Self {
        Self {
            style,
            text: text.trim().to_string(),
            count,
        }
    }
}

/// Read-through cache capability injected into the boundary layer.
pub trait VariantCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<Variants>;
    fn put(&self, key: CacheKey, value: Variants, ttl: Duration);
}

// ---------------------------------------------------------------------------
// NoCache
// ---------------------------------------------------------------------------

/// A cache that stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl VariantCache for NoCache {
    fn get(&self, _key: &CacheKey) -> Option<Variants> {
        None
    }

    fn put(&self, _key: CacheKey, _value: Variants, _ttl: Duration) {}
}

// ---------------------------------------------------------------------------
// TtlCache
// ---------------------------------------------------------------------------

/// Hit/miss counters for a [`TtlCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entries dropped on read because their TTL had passed.
    pub expired: u64,
    /// Live entries pushed out by an insert at capacity.
    pub evictions: u64,
    pub len: usize,
}

impl CacheStats {
    /// Fraction of lookups that hit, 0.0 when nothing was looked up.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 { 0.0 } else { self.hits as f64 / total as f64 }
    }
}

struct Entry {
    value: Variants,
    expires_at: Instant,
}

struct Inner {
    entries: LruCache<CacheKey, Entry>,
    stats: CacheStats,
}

/// Bounded LRU cache whose entries expire after their TTL.
///
/// Expired entries are evicted lazily, on the read that finds them.
pub struct TtlCache {
    inner: Mutex<Inner>,
}

impl TtlCache {
    /// A cache holding at most `capacity` lists. Zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(capacity),
                stats: CacheStats::default(),
            }),
        }
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            len: inner.entries.len(),
            ..inner.stats
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }
}

impl std::fmt::Debug for TtlCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache").field("stats", &self.stats()).finish()
    }
}

impl VariantCache for TtlCache {
    fn get(&self, key: &CacheKey) -> Option<Variants> {
        let mut inner = self.inner.lock();
        let now = Instant::now();
        let found = inner
            .entries
            .get(key)
            .map(|entry| (entry.expires_at > now, Arc::clone(&entry.value)));

        match found {
            Some((true, value)) => {
                inner.stats.hits += 1;
                trace!(style = key.style, count = key.count, "variant cache hit");
                Some(value)
            }
            Some((false, _)) => {
                inner.entries.pop(key);
                inner.stats.expired += 1;
                inner.stats.misses += 1;
                trace!(style = key.style, count = key.count, "variant cache entry expired");
                None
            }
            None => {
                inner.stats.misses += 1;
                trace!(style = key.style, count = key.count, "variant cache miss");
                None
            }
        }
    }

    fn put(&self, key: CacheKey, value: Variants, ttl: Duration) {
        if ttl.is_zero() {
            return;
        }
        let expires_at = Instant::now() + ttl;
        let mut inner = self.inner.lock();
        // `push` also hands back the old value when it replaces an entry
        // under the same key; only a different key is an eviction.
        let refresh = inner.entries.contains(&key);
        if let Some((evicted, _)) = inner.entries.push(key, Entry { value, expires_at }) {
            if refresh {
                trace!(style = evicted.style, count = evicted.count, "variant cache refreshed entry");
            } else {
                inner.stats.evictions += 1;
                trace!(style = evicted.style, count = evicted.count, "variant cache evicted entry");
            }
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────
