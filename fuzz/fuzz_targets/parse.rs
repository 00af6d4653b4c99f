//! Fuzz target for polynomial parsing.
//!
//! Tests that:
//! - No panics on arbitrary text
//! - Accepted polynomials have a non-zero 32-bit view and degree <= 32
//! - Formatting an accepted polynomial with a variable and a constant term
//!   parses back to it

#![no_main]

use libfuzzer_sys::fuzz_target;
use polycrc::{MAX_DEGREE, ParseError, Polynomial};

fuzz_target!(|text: &str| {
  match Polynomial::parse(text) {
    Ok(poly) => {
      assert_ne!(poly.normal(), 0, "accepted a zero polynomial");
      assert!(poly.degree().is_some_and(|d| d <= MAX_DEGREE));
      assert_eq!(poly.reflected().reverse_bits(), poly.normal());

      if poly.contains(0) && poly.degree() > Some(0) {
        assert_eq!(Polynomial::parse(&poly.to_string()), Ok(poly), "display round trip");
      }
    }
    Err(ParseError::MissingVariable) => {
      assert!(!text.contains(['x', 'X']), "missed a variable");
    }
    Err(_) => {}
  }
});
