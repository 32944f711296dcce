//! Expiring Cache Module
//!
//! A small in-process read-through cache used by the service layer to avoid
//! repeating user and post lookups against the database.
//!
//! # Semantics
//!
//! - Every entry lives for the same configured TTL, counted from the `set`
//!   that stored it.
//! - Expiry is lazy: there is no sweeper task. A `get` that finds an expired
//!   entry removes it and reports a miss.
//! - A miss caused by expiry is indistinguishable from a miss caused by
//!   absence, so callers always fall back to the source of truth.
//! - A TTL too large to add to the current `Instant` yields entries that
//!   never expire.
//!
//! # Thread Safety
//!
//! One `std::sync::Mutex` guards the map and is never held across an
//! `.await`. Every `get`/`set` is linearizable. Clones share the same map.
//!
//! Stale entries for keys that are never read again stay in memory until the
//! key is overwritten, invalidated, or the process restarts.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use blogd::backend::cache::ExpiringCache;
//!
//! let cache: ExpiringCache<String> = ExpiringCache::new(Duration::from_secs(300));
//! cache.set("alice", "cached".to_string());
//! assert_eq!(cache.get("alice"), Some("cached".to_string()));
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// A cached value together with the instant it stops being valid.
///
/// `None` means the TTL overflowed the clock and the entry never expires.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        matches!(self.expires_at, Some(at) if at <= now)
    }
}

/// Time-expiring key/value cache keyed by string.
///
/// The value type is a generic parameter, so each cache holds exactly one
/// kind of record and callers get it back without any runtime downcast.
#[derive(Debug, Clone)]
pub struct ExpiringCache<V> {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<String, CacheEntry<V>>>>,
}

impl<V: Clone> ExpiringCache<V> {
    /// Create an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Store `value` under `key`, replacing any previous entry.
    ///
    /// The entry expires `ttl` after this call.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let entry = CacheEntry {
            value,
            expires_at: Instant::now().checked_add(self.ttl),
        };
        self.lock().insert(key, entry);
    }

    /// Look up `key`.
    ///
    /// Returns `None` when the key is absent or its entry has expired; an
    /// expired entry is removed before returning.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let mut entries = self.lock();

        match entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(key);
                tracing::debug!("cache entry expired: {}", key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Drop the entry for `key`, if any.
    pub fn invalidate(&self, key: &str) {
        self.lock().remove(key);
    }

    /// Number of entries currently held, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave the map half-written
    // (every mutation is a single insert/remove), so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::thread;

    #[test]
    fn test_get_missing_key() {
        let cache: ExpiringCache<u32> = ExpiringCache::new(Duration::from_secs(60));
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn test_set_then_get() {
        let cache = ExpiringCache::new(Duration::from_secs(60));
        cache.set("post-1", "hello".to_string());
        assert_eq!(cache.get("post-1"), Some("hello".to_string()));
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let cache = ExpiringCache::new(Duration::from_millis(20));
        cache.set("alice", 7u32);
        thread::sleep(Duration::from_millis(40));

        assert_eq!(cache.get("alice"), None);
        // The stale entry was evicted by the read.
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_ttl_is_immediately_stale() {
        let cache = ExpiringCache::new(Duration::ZERO);
        cache.set("k", 1u8);
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_overwrite_resets_expiry() {
        let cache = ExpiringCache::new(Duration::from_millis(500));
        cache.set("k", 1u32);
        thread::sleep(Duration::from_millis(300));
        cache.set("k", 2u32);
        thread::sleep(Duration::from_millis(300));

        // 600ms since the first set, 300ms since the second.
        assert_eq!(cache.get("k"), Some(2));
    }

    #[test]
    fn test_unbounded_ttl_does_not_overflow() {
        let cache = ExpiringCache::new(Duration::from_secs(u64::MAX));
        cache.set("k", 1u32);
        assert_eq!(cache.get("k"), Some(1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate() {
        let cache = ExpiringCache::new(Duration::from_secs(60));
        cache.set("k", 1u32);
        cache.invalidate("k");
        assert_eq!(cache.get("k"), None);

        // Invalidating an absent key is a no-op.
        cache.invalidate("never-set");
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = ExpiringCache::new(Duration::from_secs(60));
        let other = cache.clone();
        other.set("shared", 42u32);
        assert_eq!(cache.get("shared"), Some(42));
    }

    #[test]
    fn test_concurrent_access() {
        let cache = ExpiringCache::new(Duration::from_secs(60));
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..200 {
                        let key = format!("{}-{}", worker, i);
                        cache.set(key.clone(), i);
                        assert_eq!(cache.get(&key), Some(i));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 8 * 200);
    }

    proptest! {
        #[test]
        fn prop_set_then_get_returns_value(key in ".*", value in any::<i64>()) {
            let cache = ExpiringCache::new(Duration::from_secs(60));
            cache.set(key.clone(), value);
            prop_assert_eq!(cache.get(&key), Some(value));
        }

        #[test]
        fn prop_last_write_wins(key in "[a-z]{1,12}", first in any::<i64>(), second in any::<i64>()) {
            let cache = ExpiringCache::new(Duration::from_secs(60));
            cache.set(key.clone(), first);
            cache.set(key.clone(), second);
            prop_assert_eq!(cache.get(&key), Some(second));
        }
    }
}
