//! Fuzz target for the table-driven engine.
//!
//! Tests that:
//! - The table engine agrees with the bitwise reference for any polynomial
//! - The cached path agrees with a freshly built table
//! - `Crc32Engine` agrees with the free function

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use polycrc::{Crc32Engine, build_table, compute, compute_crc32, reference};

#[derive(Arbitrary, Debug)]
struct Input {
  polynomial: u32,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let table = build_table(input.polynomial);

  let oneshot = compute(data, &table);
  assert_eq!(oneshot, reference::checksum_bitwise(input.polynomial, data), "reference mismatch");
  assert_eq!(oneshot, compute_crc32(data, input.polynomial), "cache mismatch");
  assert_eq!(oneshot, Crc32Engine::new(input.polynomial).checksum(data), "engine mismatch");
});
