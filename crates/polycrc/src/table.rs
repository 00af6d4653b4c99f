//! Const-fn lookup table generation for the reflected CRC-32.
//!
//! A [`CrcTable`] holds the CRC contribution of every possible input byte for
//! one generator polynomial. It is computed with `const fn`, so tables for
//! fixed polynomials are embedded in the binary ([`IEEE_TABLE`]), while
//! tables for user-supplied polynomials are built at runtime in O(256×8).

// SAFETY: All array indexing in this module uses bounded loop indices (0..256)
// or a `u8` index into a 256-entry array.
#![allow(clippy::indexing_slicing)]

use crate::params::{CASTAGNOLI_REFLECTED, IEEE_REFLECTED};

/// Generate a single CRC-32 lookup table entry.
///
/// Uses bit-by-bit computation with the reflected polynomial.
#[must_use]
pub const fn table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// A 256-entry byte-at-a-time lookup table for one reflected polynomial.
///
/// Tables are immutable once built and cheap to share: they are `Copy`,
/// `Send` and `Sync`, so one table can serve any number of concurrent
/// [`compute`](crate::compute) calls.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CrcTable {
  polynomial: u32,
  entries: [u32; 256],
}

impl CrcTable {
  /// Build the table for a reflected polynomial mask.
  #[must_use]
  pub const fn new(polynomial: u32) -> Self {
    let mut entries = [0u32; 256];
    let mut i = 0usize;
    while i < 256 {
      entries[i] = table_entry(polynomial, i as u8);
      i += 1;
    }
    Self { polynomial, entries }
  }

  /// The reflected polynomial mask this table was built from.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    self.polynomial
  }

  /// Table entry for one byte value.
  #[inline]
  #[must_use]
  pub const fn entry(&self, byte: u8) -> u32 {
    self.entries[byte as usize]
  }

  /// All 256 entries, indexed by byte value.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[u32; 256] {
    &self.entries
  }
}

impl core::fmt::Debug for CrcTable {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("CrcTable")
      .field("polynomial", &format_args!("{:#010X}", self.polynomial))
      .finish_non_exhaustive()
  }
}

/// Build the lookup table for a reflected polynomial mask.
#[inline]
#[must_use]
pub const fn build_table(polynomial: u32) -> CrcTable {
  CrcTable::new(polynomial)
}

/// Table for CRC-32 (IEEE 802.3), computed at compile time.
pub static IEEE_TABLE: CrcTable = CrcTable::new(IEEE_REFLECTED);

/// Table for CRC-32C (Castagnoli), computed at compile time.
pub static CASTAGNOLI_TABLE: CrcTable = CrcTable::new(CASTAGNOLI_REFLECTED);

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::*;

  #[test]
  fn has_256_entries() {
    assert_eq!(IEEE_TABLE.entries().len(), 256);
  }

  #[test]
  fn entry_zero_is_zero() {
    // No bit ever gets shifted out of a zero register.
    for poly in [0u32, IEEE_REFLECTED, CASTAGNOLI_REFLECTED, u32::MAX] {
      assert_eq!(build_table(poly).entry(0), 0);
    }
  }

  #[test]
  fn well_known_ieee_entries() {
    // First entries of the classic zlib table.
    assert_eq!(IEEE_TABLE.entry(1), 0x7707_3096);
    assert_eq!(IEEE_TABLE.entry(2), 0xEE0E_612C);
    assert_eq!(IEEE_TABLE.entry(255), 0x2D02_EF8D);
  }

  #[test]
  fn entry_128_is_polynomial() {
    // 0x80 shifts out its only set bit on the last iteration.
    for poly in [IEEE_REFLECTED, CASTAGNOLI_REFLECTED, 0x9000_0000] {
      assert_eq!(build_table(poly).entry(0x80), poly);
    }
  }

  #[test]
  fn build_is_pure() {
    let poly = 0x1234_5679;
    assert_eq!(build_table(poly), build_table(poly));
    assert_eq!(build_table(poly).entries(), build_table(poly).entries());
  }

  #[test]
  fn runtime_matches_static() {
    assert_eq!(build_table(IEEE_REFLECTED), IEEE_TABLE);
    assert_eq!(build_table(CASTAGNOLI_REFLECTED), CASTAGNOLI_TABLE);
  }

  #[test]
  fn remembers_polynomial() {
    assert_eq!(IEEE_TABLE.polynomial(), 0xEDB8_8320);
  }

  #[test]
  fn entries_match_table_entry() {
    let table = build_table(CASTAGNOLI_REFLECTED);
    for byte in 0u8..=255 {
      assert_eq!(table.entry(byte), table_entry(CASTAGNOLI_REFLECTED, byte));
    }
  }

  #[test]
  fn debug_shows_polynomial() {
    assert_eq!(format!("{IEEE_TABLE:?}"), "CrcTable { polynomial: 0xEDB88320, .. }");
  }
}
