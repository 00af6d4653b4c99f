//! Error types for polynomial parsing.
//!
//! Checksum computation itself is infallible; the only failure path is
//! turning text into a usable generator polynomial.

use thiserror::Error;

/// The polynomial expression could not be turned into a usable generator.
///
/// Both variants mean no checksum should be computed. They are kept apart so
/// callers can tell "this is not a polynomial" from "this polynomial has
/// nothing a 32-bit CRC can use".
///
/// # Examples
///
/// ```
/// use polycrc::{ParseError, Polynomial};
///
/// assert_eq!(Polynomial::parse("1 + 1"), Err(ParseError::MissingVariable));
/// assert_eq!(Polynomial::parse("x^40"), Err(ParseError::ZeroPolynomial));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum ParseError {
  /// The expression contains no `x`, so it has no variable term.
  ///
  /// The empty string (or whitespace only) reports this variant.
  #[error("polynomial has no `x` term")]
  MissingVariable,

  /// Every recognized term was out of range or was the implicit `x^32`,
  /// leaving an all-zero 32-bit polynomial.
  #[error("polynomial has no terms below x^32")]
  ZeroPolynomial,
}
