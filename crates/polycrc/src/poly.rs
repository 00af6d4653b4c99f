//! Generator polynomials and their algebraic notation.
//!
//! A [`Polynomial`] records which powers of `x` appear in a generator
//! polynomial of degree at most 32. It is usually parsed from text such as
//! `"x^32 + x^26 + x^23 + ... + x + 1"`.
//!
//! # Representations
//!
//! | View | Bit `k` means | IEEE value |
//! |------|---------------|------------|
//! | [`normal`](Polynomial::normal) | term `x^k` | `0x04C11DB7` |
//! | [`reflected`](Polynomial::reflected) | term `x^(31-k)` | `0xEDB88320` |
//!
//! The `x^32` term is the implicit leading term of every CRC-32 generator.
//! It is remembered (so [`degree`](Polynomial::degree) and `Display` report
//! it) but it is not part of either 32-bit view.
//!
//! # Grammar
//!
//! The accepted notation is deliberately loose:
//!
//! - Whitespace anywhere is ignored.
//! - Every `x` (or `X`), optionally followed by `^`, optionally followed by
//!   decimal digits, is a term. A bare `x` is `x^1`.
//! - Terms of degree above 32, and negative exponents (`x^-3`), are skipped
//!   without failing the parse.
//! - The constant term is detected heuristically: it is present if the
//!   text contains `+1` or ends in `1`. As a consequence `x^3 - 1` and
//!   `x^32 + x^21` both gain a constant term.

use core::{fmt, iter::FusedIterator, str::FromStr};

use crate::{
  error::ParseError,
  params::{CASTAGNOLI_NORMAL, IEEE_NORMAL, reflect32},
};

/// Highest exponent a CRC-32 generator polynomial can have.
pub const MAX_DEGREE: u32 = 32;

const LEADING_TERM: u64 = 1 << MAX_DEGREE;

/// A CRC-32 generator polynomial.
///
/// # Example
///
/// ```
/// use polycrc::Polynomial;
///
/// let poly = Polynomial::parse(
///   "x^32 + x^26 + x^23 + x^22 + x^16 + x^12 + x^11 + x^10 + x^8 + x^7 + x^5 + x^4 + x^2 + x + 1",
/// )?;
/// assert_eq!(poly.normal(), 0x04C1_1DB7);
/// assert_eq!(poly.reflected(), 0xEDB8_8320);
/// assert_eq!(poly, Polynomial::IEEE);
/// # Ok::<(), polycrc::ParseError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Polynomial {
  /// Bit `k` set means `x^k` is present. Only bits 0..=32 are used.
  terms: u64,
}

impl Polynomial {
  /// CRC-32 (IEEE 802.3): Ethernet, gzip, zip, PNG.
  pub const IEEE: Self = Self::from_normal(IEEE_NORMAL);

  /// CRC-32C (Castagnoli): iSCSI, SCTP, ext4, Btrfs.
  pub const CASTAGNOLI: Self = Self::from_normal(CASTAGNOLI_NORMAL);

  /// Polynomial from its normal-form mask, with the implicit `x^32` term.
  #[inline]
  #[must_use]
  pub const fn from_normal(mask: u32) -> Self {
    Self {
      terms: LEADING_TERM | mask as u64,
    }
  }

  /// Polynomial from its reflected-form mask (e.g. `0xEDB88320`), with the
  /// implicit `x^32` term.
  #[inline]
  #[must_use]
  pub const fn from_reflected(mask: u32) -> Self {
    Self::from_normal(reflect32(mask))
  }

  /// Parse an algebraic expression.
  ///
  /// # Errors
  ///
  /// - [`ParseError::MissingVariable`] if the text contains no `x`.
  /// - [`ParseError::ZeroPolynomial`] if no term of degree 0..=31 survives.
  pub fn parse(expression: &str) -> Result<Self, ParseError> {
    let (saw_variable, mut terms) = scan_terms(expression);
    if !saw_variable {
      return Err(ParseError::MissingVariable);
    }

    if has_constant_term(expression) {
      terms |= 1;
    }

    let poly = Self { terms };
    if poly.normal() == 0 {
      return Err(ParseError::ZeroPolynomial);
    }
    Ok(poly)
  }

  /// Normal-form mask: bit `k` is the coefficient of `x^k`, for `k < 32`.
  #[inline]
  #[must_use]
  pub const fn normal(&self) -> u32 {
    self.terms as u32
  }

  /// Reflected-form mask, the XOR constant of the reflected CRC algorithm.
  #[inline]
  #[must_use]
  pub const fn reflected(&self) -> u32 {
    reflect32(self.normal())
  }

  /// Highest exponent present.
  #[inline]
  #[must_use]
  pub const fn degree(&self) -> Option<u32> {
    if self.terms == 0 {
      None
    } else {
      Some(63 - self.terms.leading_zeros())
    }
  }

  /// Whether the term `x^exponent` is present.
  #[inline]
  #[must_use]
  pub const fn contains(&self, exponent: u32) -> bool {
    exponent <= MAX_DEGREE && (self.terms >> exponent) & 1 != 0
  }

  /// Exponents present, highest first.
  #[inline]
  pub fn exponents(&self) -> Exponents {
    Exponents { remaining: self.terms }
  }

  /// CRC-32 of `data` under this polynomial.
  ///
  /// With the `std` feature the lookup table comes from the process-wide
  /// [`TableCache`](crate::TableCache).
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u32 {
    crate::compute_crc32(data, self.reflected())
  }
}

impl FromStr for Polynomial {
  type Err = ParseError;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

/// Writes algebraic notation, highest term first: `x^32 + x^26 + ... + x + 1`.
///
/// Parsing the output yields the same polynomial whenever the constant term
/// is present (see the module docs for why it matters).
impl fmt::Display for Polynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for exponent in self.exponents() {
      if !first {
        f.write_str(" + ")?;
      }
      first = false;
      match exponent {
        0 => f.write_str("1")?,
        1 => f.write_str("x")?,
        k => write!(f, "x^{k}")?,
      }
    }
    if first {
      f.write_str("0")?;
    }
    Ok(())
  }
}

impl fmt::Debug for Polynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Polynomial")
      .field("normal", &format_args!("{:#010X}", self.normal()))
      .field("reflected", &format_args!("{:#010X}", self.reflected()))
      .field("degree", &self.degree())
      .finish()
  }
}

/// Iterator over the exponents of a [`Polynomial`], highest first.
#[derive(Clone, Debug)]
pub struct Exponents {
  remaining: u64,
}

impl Iterator for Exponents {
  type Item = u32;

  #[inline]
  fn next(&mut self) -> Option<u32> {
    if self.remaining == 0 {
      return None;
    }
    let exponent = 63 - self.remaining.leading_zeros();
    self.remaining &= !(1u64 << exponent);
    Some(exponent)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.remaining.count_ones() as usize;
    (n, Some(n))
  }
}

impl ExactSizeIterator for Exponents {}

impl FusedIterator for Exponents {}

// ─────────────────────────────────────────────────────────────────────────────
// Scanner
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
fn cleaned(expression: &str) -> impl Iterator<Item = char> + Clone + '_ {
  expression.chars().filter(|c| !c.is_whitespace())
}

#[inline]
const fn is_variable(c: char) -> bool {
  matches!(c, 'x' | 'X')
}

/// Collect `x[^][digits]` terms. Returns whether any `x` was seen.
fn scan_terms(expression: &str) -> (bool, u64) {
  let mut chars = cleaned(expression).peekable();
  let mut saw_variable = false;
  let mut terms = 0u64;

  while let Some(c) = chars.next() {
    if !is_variable(c) {
      continue;
    }
    saw_variable = true;

    let mut negative = false;
    if chars.next_if_eq(&'^').is_some() {
      let mut ahead = chars.clone();
      if ahead.next() == Some('-') && ahead.peek().is_some_and(char::is_ascii_digit) {
        chars.next();
        negative = true;
      }
    }

    let mut degree = Some(0u32);
    let mut has_digits = false;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
      chars.next();
      has_digits = true;
      degree = degree.and_then(|d| d.checked_mul(10)).and_then(|d| d.checked_add(digit));
    }

    if negative {
      continue;
    }
    let degree = if has_digits { degree } else { Some(1) };
    // Out-of-range (including overflowing) exponents drop only this term.
    if let Some(k) = degree.filter(|&k| k <= MAX_DEGREE) {
      terms |= 1u64 << k;
    }
  }

  (saw_variable, terms)
}

/// Constant-term heuristic: `+1` anywhere, or a trailing `1`.
fn has_constant_term(expression: &str) -> bool {
  let mut prev = None;
  let mut plus_one = false;
  for c in cleaned(expression) {
    if prev == Some('+') && c == '1' {
      plus_one = true;
    }
    prev = Some(c);
  }
  plus_one || prev == Some('1')
}
