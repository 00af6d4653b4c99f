//! Bitwise reference implementation of the reflected CRC-32.
//!
//! This is the "source of truth" the table-driven engine is checked against.
//! It processes one bit at a time and uses no lookup table, so it mirrors the
//! mathematical definition directly:
//!
//! - **Obviously correct**: ~10 lines, no precomputed state
//! - **Const-evaluable**: check values are verified at compile time
//!
//! It is intentionally slow (~8 operations per bit). Use it for test oracles
//! and auditing, not for throughput.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::params::{CASTAGNOLI_REFLECTED, CHECK_INPUT, IEEE_REFLECTED, INITIAL, XOR_OUT};

/// Bitwise CRC-32 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0xEDB88320 for CRC-32-IEEE)
/// * `init` - Initial register value (typically 0xFFFFFFFF)
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw CRC register state (caller applies final XOR if needed).
#[must_use]
pub(crate) const fn crc32_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Complete bitwise checksum: initial value, bitwise update, final XOR.
///
/// ```
/// use polycrc::reference::checksum_bitwise;
///
/// assert_eq!(checksum_bitwise(0xEDB8_8320, b"123456789"), 0xCBF4_3926);
/// ```
///
/// Only the finished checksum is public; the raw register is not:
///
/// ```compile_fail
/// use polycrc::reference::crc32_bitwise;
/// ```
#[must_use]
pub const fn checksum_bitwise(poly: u32, data: &[u8]) -> u32 {
  crc32_bitwise(poly, INITIAL, data) ^ XOR_OUT
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// CRC-32-IEEE check value: 0xCBF43926
const _: () = assert!(checksum_bitwise(IEEE_REFLECTED, CHECK_INPUT) == 0xCBF4_3926);

// CRC-32C (Castagnoli) check value: 0xE3069283
const _: () = assert!(checksum_bitwise(CASTAGNOLI_REFLECTED, CHECK_INPUT) == 0xE306_9283);

// "The quick brown fox jumps over the lazy dog" under CRC-32-IEEE: 0x414FA339
const _: () = assert!(checksum_bitwise(IEEE_REFLECTED, b"The quick brown fox jumps over the lazy dog") == 0x414F_A339);
