// src/cache.rs

//! Unbounded memoization cache for conversion results.

use dashmap::DashMap;
use std::fmt;
use std::hash::Hash;

/// A concurrency-safe key/value memo with a single narrow entry point.
///
/// Entries live for the owner's lifetime: the projection is a pure function
/// of immutable geometry constants, so nothing is ever invalidated or
/// evicted. Safe to share across threads (the service spawns one converter
/// behind an `Arc`).
pub(crate) struct MemoCache<K, V> {
  entries: DashMap<K, V>,
}

impl<K: Eq + Hash, V> fmt::Debug for MemoCache<K, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MemoCache").field("len", &self.entries.len()).finish()
  }
}

impl<K: Eq + Hash, V> Default for MemoCache<K, V> {
  fn default() -> Self {
    MemoCache {
      entries: DashMap::new(),
    }
  }
}

impl<K, V> MemoCache<K, V>
where
  K: Eq + Hash,
  V: Clone,
{
  pub(crate) fn new() -> Self {
    MemoCache::default()
  }

  /// Returns the cached value for `key`, computing and storing it on the
  /// first call. Repeated calls with the same key return the stored value
  /// bit-identically, without recomputation.
  pub(crate) fn get_or_compute(&self, key: K, compute: impl FnOnce() -> V) -> V {
    if let Some(hit) = self.entries.get(&key) {
      return hit.value().clone();
    }
    let value = compute();
    self.entries.insert(key, value.clone());
    value
  }

  /// Number of memoized entries.
  #[cfg(test)]
  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::atomic::{AtomicUsize, Ordering};

  #[test]
  fn test_computes_once_per_key() {
    let cache: MemoCache<u64, f64> = MemoCache::new();
    let calls = AtomicUsize::new(0);

    let first = cache.get_or_compute(7, || {
      calls.fetch_add(1, Ordering::SeqCst);
      42.0
    });
    let second = cache.get_or_compute(7, || {
      calls.fetch_add(1, Ordering::SeqCst);
      unreachable!("second lookup must hit the cache")
    });

    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len(), 1);
  }

  #[test]
  fn test_distinct_keys_compute_separately() {
    let cache: MemoCache<(u64, bool), u32> = MemoCache::new();
    assert_eq!(cache.get_or_compute((1, false), || 10), 10);
    assert_eq!(cache.get_or_compute((1, true), || 20), 20);
    assert_eq!(cache.len(), 2);
  }
}
