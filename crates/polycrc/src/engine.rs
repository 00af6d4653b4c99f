//! Table-driven CRC-32 computation.
//!
//! The model is fixed: reflected input and output, initial value
//! `0xFFFFFFFF`, final XOR `0xFFFFFFFF`. Only the polynomial varies, and it
//! reaches this module already baked into a [`CrcTable`].

use crate::{
  params::{INITIAL, XOR_OUT},
  poly::Polynomial,
  table::CrcTable,
};

/// Byte-at-a-time table loop over the raw register.
///
/// Kept private: the register is never handed out, so a checksum cannot be
/// resumed across calls.
#[inline]
#[allow(clippy::indexing_slicing)] // i < data.len()
const fn update(mut crc: u32, data: &[u8], table: &CrcTable) -> u32 {
  let mut i = 0;
  while i < data.len() {
    crc = table.entry((crc ^ data[i] as u32) as u8) ^ (crc >> 8);
    i += 1;
  }
  crc
}

/// Compute the CRC-32 of `data` with a prebuilt table.
///
/// Empty input yields `0`. This is the only entry point into the table
/// engine; the input must be passed in one piece.
///
/// # Example
///
/// ```
/// use polycrc::{IEEE_TABLE, compute};
///
/// assert_eq!(compute(b"123456789", &IEEE_TABLE), 0xCBF4_3926);
/// assert_eq!(compute(b"", &IEEE_TABLE), 0);
/// ```
///
/// The raw register update is not part of the API:
///
/// ```compile_fail
/// use polycrc::update;
/// ```
#[inline]
#[must_use]
pub const fn compute(data: &[u8], table: &CrcTable) -> u32 {
  update(INITIAL, data, table) ^ XOR_OUT
}

/// A CRC-32 engine bound to one generator polynomial.
///
/// Owns its lookup table, so repeated checksums with the same polynomial
/// skip table construction entirely.
///
/// # Example
///
/// ```
/// use polycrc::{Crc32Engine, Polynomial};
///
/// let poly: Polynomial = "x^32 + x^28 + x^27 + x^26 + x^25 + x^23 + x^22 + x^20 + x^19 \
///                         + x^18 + x^14 + x^13 + x^11 + x^10 + x^9 + x^8 + x^6 + 1"
///   .parse()?;
/// let engine = Crc32Engine::for_polynomial(&poly);
/// assert_eq!(engine.checksum(b"123456789"), 0xE306_9283);
/// # Ok::<(), polycrc::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32Engine {
  table: CrcTable,
}

impl Crc32Engine {
  /// CRC-32 (IEEE 802.3).
  pub const IEEE: Self = Self::new(Polynomial::IEEE.reflected());

  /// Build an engine for a reflected polynomial mask.
  #[inline]
  #[must_use]
  pub const fn new(polynomial: u32) -> Self {
    Self {
      table: CrcTable::new(polynomial),
    }
  }

  /// Build an engine for a parsed polynomial.
  #[inline]
  #[must_use]
  pub const fn for_polynomial(polynomial: &Polynomial) -> Self {
    Self::new(polynomial.reflected())
  }

  /// Wrap an existing table.
  #[inline]
  #[must_use]
  pub const fn from_table(table: CrcTable) -> Self {
    Self { table }
  }

  /// The reflected polynomial mask.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    self.table.polynomial()
  }

  /// The lookup table.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &CrcTable {
    &self.table
  }

  /// Compute the checksum of `data`.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u32 {
    compute(data, &self.table)
  }
}

impl From<CrcTable> for Crc32Engine {
  #[inline]
  fn from(table: CrcTable) -> Self {
    Self::from_table(table)
  }
}
