//! Fixed CRC-32 model parameters and well-known generator polynomials.
//!
//! Only the generator polynomial is configurable. The rest of the model
//! follows the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/)
//! entry for CRC-32/ISO-HDLC:
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | `width`   | 32 |
//! | `init`    | `0xFFFFFFFF` |
//! | `refin`   | true |
//! | `refout`  | true |
//! | `xorout`  | `0xFFFFFFFF` |

/// Initial value of the CRC register.
pub const INITIAL: u32 = 0xFFFF_FFFF;

/// Value XORed into the register after the last byte.
pub const XOR_OUT: u32 = 0xFFFF_FFFF;

/// CRC-32 (IEEE 802.3), normal form.
pub const IEEE_NORMAL: u32 = 0x04C1_1DB7;

/// CRC-32 (IEEE 802.3), reflected form.
pub const IEEE_REFLECTED: u32 = reflect32(IEEE_NORMAL);

/// CRC-32C (Castagnoli), normal form.
pub const CASTAGNOLI_NORMAL: u32 = 0x1EDC_6F41;

/// CRC-32C (Castagnoli), reflected form.
pub const CASTAGNOLI_REFLECTED: u32 = reflect32(CASTAGNOLI_NORMAL);

/// Standard check input from the CRC Catalogue.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// Reflect (bit-reverse) a 32-bit polynomial.
///
/// Maps the normal (MSB-first) form to the reflected (LSB-first) form and
/// back. The operation is its own inverse.
#[inline]
#[must_use]
pub const fn reflect32(value: u32) -> u32 {
  value.reverse_bits()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ieee_reflected() {
    assert_eq!(IEEE_REFLECTED, 0xEDB8_8320);
  }

  #[test]
  fn castagnoli_reflected() {
    assert_eq!(CASTAGNOLI_REFLECTED, 0x82F6_3B78);
  }

  #[test]
  fn reflect_is_involution() {
    for value in [0u32, 1, 0x8000_0000, 0x1234_5678, 0xDEAD_BEEF, u32::MAX] {
      assert_eq!(reflect32(reflect32(value)), value);
    }
  }

  #[test]
  fn reflect_moves_low_bit_high() {
    assert_eq!(reflect32(1), 0x8000_0000);
    assert_eq!(reflect32(0b1001), 0x9000_0000);
  }
}
