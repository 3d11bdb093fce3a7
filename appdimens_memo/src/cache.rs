// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded, thread-safe result store.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use appdimens_core::config::DEFAULT_CACHE_CAPACITY;
use appdimens_core::host::Environment;
use appdimens_core::trace::{CacheEvent, CacheEventKind, Tracer};
use hashbrown::HashMap;

use crate::key::CacheKey;

/// Point-in-time cache counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Stored results.
    pub entries: usize,
    /// Lookups answered from the store.
    pub hits: u64,
    /// Lookups that had to compute.
    pub misses: u64,
    /// Entries held before the store flushes.
    pub capacity: usize,
}

impl CacheStats {
    /// `hits / (hits + misses)`, or 0 before the first lookup.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memoized results keyed by [`CacheKey`].
///
/// Reads take a shared lock, so concurrent lookups do not serialize. When an
/// insert would exceed the capacity the whole store is flushed first; results
/// are cheap to recompute, so there is no eviction order to maintain.
///
/// A poisoned lock is treated as a disabled cache: callers still get correct
/// results, computed directly.
#[derive(Debug)]
pub struct MemoCache {
    entries: RwLock<HashMap<CacheKey, f64>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoCache {
    /// Creates an empty cache. A capacity of 0 stores nothing.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Maximum stored entries.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the stored result for `key`, if any. Does not touch counters.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<f64> {
        self.entries.read().ok()?.get(key).copied()
    }

    /// Number of stored results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |e| e.len())
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cached result for `key`, or runs `compute` and stores its
    /// result.
    ///
    /// A `None` key (non-finite input) always computes. Errors are returned
    /// as-is and never stored. One [`CacheEvent`] is emitted per call, plus a
    /// [`Flush`](CacheEventKind::Flush) event if the store had to be emptied.
    ///
    /// # Errors
    ///
    /// Whatever `compute` returns.
    pub fn memoize<E>(
        &self,
        key: Option<CacheKey>,
        tracer: &mut Tracer<'_>,
        compute: impl FnOnce(&mut Tracer<'_>) -> Result<f64, E>,
    ) -> Result<f64, E> {
        let Some(key) = key.filter(|_| self.capacity > 0) else {
            return self.bypass(tracer, compute);
        };
        let cached = match self.entries.read() {
            Ok(entries) => entries.get(&key).copied(),
            Err(_) => return self.bypass(tracer, compute),
        };
        if let Some(value) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracer.cache(&CacheEvent {
                kind: CacheEventKind::Hit,
                entries: self.len(),
            });
            return Ok(value);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = compute(tracer)?;
        let Ok(mut entries) = self.entries.write() else {
            tracer.cache(&CacheEvent {
                kind: CacheEventKind::Bypass,
                entries: 0,
            });
            return Ok(value);
        };
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            entries.clear();
            tracer.cache(&CacheEvent {
                kind: CacheEventKind::Flush,
                entries: 0,
            });
        }
        entries.insert(key, value);
        tracer.cache(&CacheEvent {
            kind: CacheEventKind::Miss,
            entries: entries.len(),
        });
        Ok(value)
    }

    fn bypass<E>(
        &self,
        tracer: &mut Tracer<'_>,
        compute: impl FnOnce(&mut Tracer<'_>) -> Result<f64, E>,
    ) -> Result<f64, E> {
        let value = compute(tracer)?;
        tracer.cache(&CacheEvent {
            kind: CacheEventKind::Bypass,
            entries: self.len(),
        });
        Ok(value)
    }

    /// Drops every stored result and returns how many there were. Counters
    /// are kept.
    pub fn clear(&self) -> usize {
        match self.entries.write() {
            Ok(mut entries) => {
                let n = entries.len();
                entries.clear();
                n
            }
            Err(_) => 0,
        }
    }

    /// Clears the store if the environment changed.
    ///
    /// Keys already include the environment, so stale entries are never
    /// returned; this only frees their memory after a rotation, resize or
    /// mode change. Returns `true` if the store was cleared.
    pub fn invalidate_on_change(&self, old: &Environment, new: &Environment) -> bool {
        if old == new {
            return false;
        }
        self.clear();
        true
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            capacity: self.capacity,
        }
    }

    /// Clears the store and zeroes the counters.
    pub fn reset(&self) {
        self.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appdimens_core::dimension::Dimension;
    use appdimens_core::screen::{Reference, ScreenSnapshot};

    fn env() -> Environment {
        Environment::new(ScreenSnapshot::new(411.0, 891.0, 2.625))
    }

    fn key(base: f64) -> Option<CacheKey> {
        CacheKey::new(&Dimension::new(base), &env(), &Reference::PHONE_DP)
    }

    fn store(cache: &MemoCache, base: f64, value: f64) -> f64 {
        cache
            .memoize(key(base), &mut Tracer::none(), |_| Ok::<_, ()>(value))
            .unwrap()
    }

    #[test]
    fn second_lookup_hits() {
        let cache = MemoCache::new(8);
        assert_eq!(store(&cache, 16.0, 20.0), 20.0);
        // A different compute result proves the stored value is returned.
        assert_eq!(store(&cache, 16.0, 99.0), 20.0);
        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn errors_are_not_stored() {
        let cache = MemoCache::new(8);
        let r = cache.memoize(key(1.0), &mut Tracer::none(), |_| Err("boom"));
        assert_eq!(r, Err("boom"));
        assert!(cache.is_empty());
        assert_eq!(store(&cache, 1.0, 2.0), 2.0);
    }

    #[test]
    fn missing_key_bypasses() {
        let cache = MemoCache::new(8);
        store(&cache, f64::NAN, 5.0);
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn full_store_flushes_before_insert() {
        let cache = MemoCache::new(2);
        store(&cache, 1.0, 1.0);
        store(&cache, 2.0, 2.0);
        assert_eq!(cache.len(), 2);
        store(&cache, 3.0, 3.0);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key(3.0).unwrap()), Some(3.0));
        assert_eq!(cache.get(&key(1.0).unwrap()), None);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let cache = MemoCache::new(0);
        store(&cache, 1.0, 1.0);
        assert!(cache.is_empty());
    }

    #[test]
    fn environment_change_clears() {
        let cache = MemoCache::default();
        store(&cache, 1.0, 1.0);
        assert!(!cache.invalidate_on_change(&env(), &env()));
        assert_eq!(cache.len(), 1);
        let rotated = Environment::new(ScreenSnapshot::new(891.0, 411.0, 2.625));
        assert!(cache.invalidate_on_change(&env(), &rotated));
        assert!(cache.is_empty());
    }

    #[test]
    fn reset_zeroes_counters() {
        let cache = MemoCache::default();
        store(&cache, 1.0, 1.0);
        store(&cache, 1.0, 1.0);
        cache.reset();
        assert_eq!(
            cache.stats(),
            CacheStats {
                capacity: DEFAULT_CACHE_CAPACITY,
                ..CacheStats::default()
            }
        );
    }

    #[test]
    fn poisoned_lock_falls_back_to_compute() {
        let cache = MemoCache::new(8);
        store(&cache, 1.0, 1.0);
        std::thread::scope(|s| {
            let _ = s
                .spawn(|| {
                    let _guard = cache.entries.write().unwrap();
                    panic!("poison");
                })
                .join();
        });
        assert_eq!(store(&cache, 1.0, 7.0), 7.0);
        assert_eq!(cache.len(), 0);
    }
}
