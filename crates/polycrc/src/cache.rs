//! Lazily populated lookup-table cache keyed by polynomial.
//!
//! Building a table costs 256×8 shift/XOR steps, which dominates checksums of
//! short buffers. [`TableCache`] builds each table once and hands out shared
//! read-only references afterwards.
//!
//! # Caching Strategy
//!
//! - Hits take a read lock and clone an `Arc`.
//! - Misses build the table with no lock held, then insert under the write
//!   lock. If another thread inserted first, its table is kept (both are
//!   identical anyway).
//! - A poisoned lock is recovered: the map only ever holds complete tables.
//! - The cache is bounded. Once it holds `capacity` tables, tables for new
//!   polynomials are still built and returned but not stored, so a host fed
//!   arbitrary polynomials keeps a fixed footprint (about 1 KiB per table).

use std::{
  collections::HashMap,
  sync::{Arc, OnceLock, PoisonError, RwLock},
};

use crate::table::CrcTable;

/// A cache of [`CrcTable`]s keyed by reflected polynomial mask.
///
/// # Example
///
/// ```
/// use polycrc::{TableCache, compute};
///
/// let cache = TableCache::new();
/// let table = cache.get_or_build(0xEDB8_8320);
/// assert_eq!(compute(b"123456789", &table), 0xCBF4_3926);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug)]
pub struct TableCache {
  tables: RwLock<HashMap<u32, Arc<CrcTable>>>,
  capacity: usize,
}

impl Default for TableCache {
  fn default() -> Self {
    Self::new()
  }
}

impl TableCache {
  /// Tables kept by [`new`](Self::new) and by the global cache.
  pub const DEFAULT_CAPACITY: usize = 64;

  /// Create an empty cache holding at most [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) tables.
  #[must_use]
  pub fn new() -> Self {
    Self::with_capacity(Self::DEFAULT_CAPACITY)
  }

  /// Create an empty cache holding at most `capacity` tables.
  ///
  /// A capacity of zero disables caching: every lookup builds a fresh table.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      tables: RwLock::new(HashMap::new()),
      capacity,
    }
  }

  /// Maximum number of tables kept.
  #[inline]
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// The process-wide cache used by [`compute_crc32`](crate::compute_crc32).
  pub fn global() -> &'static Self {
    static GLOBAL: OnceLock<TableCache> = OnceLock::new();
    GLOBAL.get_or_init(TableCache::new)
  }

  /// Get the table for `polynomial`, building it on first use.
  ///
  /// When the cache is full the new table is returned without being stored.
  pub fn get_or_build(&self, polynomial: u32) -> Arc<CrcTable> {
    if let Some(table) = self.read_lock().get(&polynomial) {
      return Arc::clone(table);
    }

    let built = Arc::new(CrcTable::new(polynomial));
    let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(table) = tables.get(&polynomial) {
      return Arc::clone(table);
    }
    if tables.len() < self.capacity {
      tables.insert(polynomial, Arc::clone(&built));
    }
    built
  }

  /// Whether a table for `polynomial` is already cached.
  #[must_use]
  pub fn contains(&self, polynomial: u32) -> bool {
    self.read_lock().contains_key(&polynomial)
  }

  /// Number of cached tables.
  #[must_use]
  pub fn len(&self) -> usize {
    self.read_lock().len()
  }

  /// Whether the cache holds no tables.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.read_lock().is_empty()
  }

  /// Drop every cached table. Tables already handed out stay valid.
  pub fn clear(&self) {
    self.tables.write().unwrap_or_else(PoisonError::into_inner).clear();
  }

  fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, HashMap<u32, Arc<CrcTable>>> {
    self.tables.read().unwrap_or_else(PoisonError::into_inner)
  }
}

#[cfg(test)]
mod tests {
  use std::{thread, vec::Vec};

  use super::*;
  use crate::{
    engine::compute,
    params::{CASTAGNOLI_REFLECTED, IEEE_REFLECTED},
    table::{IEEE_TABLE, build_table},
  };

  #[test]
  fn starts_empty() {
    let cache = TableCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
    assert!(!cache.contains(IEEE_REFLECTED));
  }

  #[test]
  fn builds_once() {
    let cache = TableCache::new();
    let a = cache.get_or_build(IEEE_REFLECTED);
    let b = cache.get_or_build(IEEE_REFLECTED);
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 1);
    assert!(cache.contains(IEEE_REFLECTED));
  }

  #[test]
  fn cached_matches_fresh() {
    let cache = TableCache::new();
    for poly in [1u32, IEEE_REFLECTED, CASTAGNOLI_REFLECTED, 0xDEAD_BEEF] {
      assert_eq!(*cache.get_or_build(poly), build_table(poly));
    }
    assert_eq!(*cache.get_or_build(IEEE_REFLECTED), IEEE_TABLE);
    assert_eq!(cache.len(), 4);
  }

  #[test]
  fn clear_keeps_handed_out_tables() {
    let cache = TableCache::new();
    let table = cache.get_or_build(CASTAGNOLI_REFLECTED);
    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(compute(b"123456789", &table), 0xE306_9283);
  }

  #[test]
  fn shared_across_threads() {
    let cache = Arc::new(TableCache::new());
    let handles: Vec<_> = (0..8)
      .map(|i| {
        let cache = Arc::clone(&cache);
        thread::spawn(move || {
          let poly = if i % 2 == 0 { IEEE_REFLECTED } else { CASTAGNOLI_REFLECTED };
          compute(b"123456789", &cache.get_or_build(poly))
        })
      })
      .collect();

    for (i, handle) in handles.into_iter().enumerate() {
      let crc = handle.join().unwrap();
      let expected = if i % 2 == 0 { 0xCBF4_3926 } else { 0xE306_9283 };
      assert_eq!(crc, expected);
    }
    assert_eq!(cache.len(), 2);
  }

  #[test]
  fn full_cache_still_builds() {
    let cache = TableCache::with_capacity(2);
    let _ = cache.get_or_build(IEEE_REFLECTED);
    let _ = cache.get_or_build(CASTAGNOLI_REFLECTED);
    let extra = cache.get_or_build(0x9000_0000);
    assert_eq!(*extra, build_table(0x9000_0000));
    assert_eq!(cache.len(), 2);
    assert!(!cache.contains(0x9000_0000));
    assert!(cache.contains(IEEE_REFLECTED));
  }

  #[test]
  fn distinct_polynomials_stay_bounded() {
    let cache = TableCache::new();
    for p in 0..5000u32 {
      let poly = p | 1;
      assert_eq!(cache.get_or_build(poly).polynomial(), poly);
    }
    assert_eq!(cache.len(), TableCache::DEFAULT_CAPACITY);
  }

  #[test]
  fn zero_capacity_never_stores() {
    let cache = TableCache::with_capacity(0);
    assert_eq!(compute(b"123456789", &cache.get_or_build(IEEE_REFLECTED)), 0xCBF4_3926);
    assert!(cache.is_empty());
    assert_eq!(cache.capacity(), 0);
  }

  #[test]
  fn global_is_singleton() {
    assert!(core::ptr::eq(TableCache::global(), TableCache::global()));
  }
}
