//! CRC-32 with a user-specified generator polynomial.
//!
//! Most CRC-32 crates hard-code one polynomial. This crate takes the
//! generator polynomial as input, written the way it appears in standards and
//! papers (`"x^32 + x^26 + ... + x + 1"`), and computes the standard
//! reflected CRC-32 with it.
//!
//! # CRC Model
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Width | 32 |
//! | Polynomial | caller-supplied |
//! | Initial value | `0xFFFFFFFF` |
//! | Reflect input/output | Yes |
//! | Final XOR | `0xFFFFFFFF` |
//!
//! With the IEEE 802.3 polynomial this is the familiar CRC-32 of zip, gzip and
//! PNG; with the Castagnoli polynomial it is CRC-32C.
//!
//! # Example
//!
//! ```rust
//! use polycrc::{Crc32Engine, compute_crc32, parse_polynomial};
//!
//! let poly = parse_polynomial(
//!   "x^32 + x^26 + x^23 + x^22 + x^16 + x^12 + x^11 + x^10 + x^8 + x^7 + x^5 + x^4 + x^2 + x + 1",
//! )?;
//! assert_eq!(poly.reflected(), 0xEDB8_8320);
//!
//! // One-shot computation from a reflected mask
//! assert_eq!(compute_crc32(b"123456789", poly.reflected()), 0xCBF4_3926);
//!
//! // Reusable engine (table built once)
//! let engine = Crc32Engine::for_polynomial(&poly);
//! assert_eq!(engine.checksum(b"123456789"), 0xCBF4_3926);
//! # Ok::<(), polycrc::ParseError>(())
//! ```
//!
//! # no_std Support
//!
//! Parsing, table construction and computation work without `std`. The
//! `std` feature (default) adds [`TableCache`], which [`compute_crc32`] uses
//! to avoid rebuilding tables.
//!
//! ```toml
//! [dependencies]
//! polycrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
mod cache;
mod engine;
mod error;
pub mod params;
mod poly;
pub mod reference;
mod table;

#[cfg(test)]
mod proptests;

#[cfg(feature = "std")]
pub use cache::TableCache;
pub use engine::{Crc32Engine, compute};
pub use error::ParseError;
pub use poly::{Exponents, MAX_DEGREE, Polynomial};
pub use table::{CASTAGNOLI_TABLE, CrcTable, IEEE_TABLE, build_table};

/// Parse an algebraic polynomial expression.
///
/// The reflected mask for [`compute_crc32`] is
/// [`Polynomial::reflected`]. See [`Polynomial`] for the accepted notation.
///
/// # Errors
///
/// Returns [`ParseError`] if the expression has no `x` or reduces to an
/// all-zero 32-bit polynomial. No checksum should be computed in that case.
#[inline]
pub fn parse_polynomial(text: &str) -> Result<Polynomial, ParseError> {
  Polynomial::parse(text)
}

/// Compute the CRC-32 of `data` for a reflected polynomial mask.
///
/// With the `std` feature the lookup table is fetched from
/// [`TableCache::global`]; otherwise it is built on every call. The result
/// is the same either way. The global cache keeps at most
/// [`TableCache::DEFAULT_CAPACITY`] tables; masks beyond that are served
/// with a table built for the call.
///
/// ```
/// assert_eq!(polycrc::compute_crc32(b"123456789", 0xEDB8_8320), 0xCBF4_3926);
/// assert_eq!(polycrc::compute_crc32(b"", 0xEDB8_8320), 0);
/// ```
#[must_use]
pub fn compute_crc32(data: &[u8], polynomial: u32) -> u32 {
  #[cfg(feature = "std")]
  {
    compute(data, &TableCache::global().get_or_build(polynomial))
  }

  #[cfg(not(feature = "std"))]
  {
    compute(data, &build_table(polynomial))
  }
}

// Table engine must agree with the bitwise reference on the check values.
const _: () = {
  let ieee = CrcTable::new(params::IEEE_REFLECTED);
  let castagnoli = CrcTable::new(params::CASTAGNOLI_REFLECTED);
  assert!(compute(params::CHECK_INPUT, &ieee) == 0xCBF4_3926);
  assert!(compute(params::CHECK_INPUT, &castagnoli) == 0xE306_9283);
  assert!(
    compute(params::CHECK_INPUT, &ieee) == reference::checksum_bitwise(params::IEEE_REFLECTED, params::CHECK_INPUT)
  );
  assert!(
    compute(params::CHECK_INPUT, &castagnoli)
      == reference::checksum_bitwise(params::CASTAGNOLI_REFLECTED, params::CHECK_INPUT)
  );
};
