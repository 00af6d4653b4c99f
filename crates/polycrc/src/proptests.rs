extern crate alloc;
extern crate std;

use alloc::{string::String, vec::Vec};

use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use crate::{Polynomial, compute, compute_crc32, reference::checksum_bitwise, table::build_table};

/// Term sets that always include the constant term, so the text form is
/// unaffected by the trailing-`1` heuristic.
fn arb_normal_with_constant() -> impl Strategy<Value = u32> {
  any::<u32>().prop_map(|mask| mask | 1)
}

fn render(exponents: &[u32]) -> String {
  let mut out = String::new();
  for (i, &k) in exponents.iter().enumerate() {
    if i > 0 {
      out.push_str(" + ");
    }
    match k {
      0 => out.push('1'),
      1 => out.push('x'),
      k => out.push_str(&alloc::format!("x^{k}")),
    }
  }
  out
}

proptest! {
  #[test]
  fn table_matches_bitwise(poly in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    prop_assert_eq!(compute(&data, &build_table(poly)), checksum_bitwise(poly, &data));
  }

  #[test]
  fn cached_matches_uncached(poly in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..=256)) {
    prop_assert_eq!(compute_crc32(&data, poly), compute(&data, &build_table(poly)));
  }

  #[test]
  fn engine_matches_bitwise_for_parsed(
    mask in arb_normal_with_constant(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let poly = Polynomial::from_normal(mask);
    prop_assert_eq!(poly.checksum(&data), checksum_bitwise(poly.reflected(), &data));
  }

  #[test]
  fn display_round_trips(mask in arb_normal_with_constant()) {
    let poly = Polynomial::from_normal(mask);
    prop_assert_eq!(Polynomial::parse(&alloc::format!("{poly}")), Ok(poly));
  }

  #[test]
  fn parse_sets_exactly_listed_terms(mask in arb_normal_with_constant()) {
    let exponents: Vec<u32> = (0..=32).rev().filter(|&k| k == 32 || mask >> k & 1 != 0).collect();
    let poly = Polynomial::parse(&render(&exponents)).unwrap();
    prop_assert_eq!(poly.normal(), mask);
    prop_assert_eq!(poly.reflected(), mask.reverse_bits());
    prop_assert_eq!(poly, Polynomial::from_normal(mask));
  }

  #[test]
  fn out_of_range_terms_do_not_disturb(mask in arb_normal_with_constant(), extra in 33u32..100_000) {
    let exponents: Vec<u32> = (0..=32).rev().filter(|&k| k == 32 || mask >> k & 1 != 0).collect();
    let text = alloc::format!("x^{extra} + {}", render(&exponents));
    prop_assert_eq!(Polynomial::parse(&text), Ok(Polynomial::from_normal(mask)));
  }

  #[test]
  fn parse_never_panics(text in "\\PC*") {
    let _ = Polynomial::parse(&text);
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against crc-fast-rust
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn ieee_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Polynomial::IEEE.checksum(&data);
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn castagnoli_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Polynomial::CASTAGNOLI.checksum(&data);
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32Iscsi, &data) as u32;
    prop_assert_eq!(ours, reference);
  }
}
