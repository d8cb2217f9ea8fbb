//! Property tests for the generic CRC engine.
//!
//! The oracle feeds the message one *bit* at a time into a width-masked
//! register, so it shares no code with the expanded-register kernels.

extern crate std;

use std::vec::Vec;

use proptest::prelude::*;
use traits::{ByteOrder, Checksum};

use super::*;
use crate::common::{reference::width_mask, reflect::reflect};

fn bit_serial_oracle(p: &CrcParameters, data: &[u8]) -> u128 {
  let w = p.width();
  let mask = width_mask(w);
  let mut reg = p.initial_value();
  for &byte in data {
    for i in 0..8 {
      let bit = if p.reflect_input() { (byte >> i) & 1 } else { (byte >> (7 - i)) & 1 };
      let top = ((reg >> (w - 1)) & 1) as u8 ^ bit;
      reg = (reg << 1) & mask;
      if top == 1 {
        reg ^= p.polynomial();
      }
    }
  }
  let out = if p.reflect_output() { reflect(reg, w) } else { reg };
  (out ^ p.xor_output()) & mask
}

prop_compose! {
  fn arb_params()(
    width in 1u32..=128,
    poly in any::<u128>(),
    init in any::<u128>(),
    xorout in any::<u128>(),
    refin in any::<bool>(),
    refout in any::<bool>(),
  ) -> CrcParameters {
    let mask = width_mask(width);
    CrcParameters::builder(width, poly & mask)
      .initial_value(init & mask)
      .xor_output(xorout & mask)
      .reflect_input(refin)
      .reflect_output(refout)
      .build()
      .unwrap()
  }
}

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  proptest::collection::vec(any::<u8>(), 0..=512)
}

proptest! {
  #![proptest_config(ProptestConfig { cases: 256, max_global_rejects: 8192, ..ProptestConfig::default() })]

  #[test]
  fn crc_matches_bit_serial_oracle(p in arb_params(), data in arb_data()) {
    prop_assert_eq!(Crc::calc(&p, &data), bit_serial_oracle(&p, &data));
  }

  #[test]
  fn kernels_agree(p in arb_params(), data in arb_data()) {
    let mut bitwise = Crc::with_force(p, CrcForce::Bitwise);
    let mut table = Crc::with_force(p, CrcForce::Table);
    bitwise.update(&data);
    table.update(&data);
    prop_assert_eq!(bitwise.finalize(), table.finalize());
  }

  #[test]
  fn chunking_equivalence(p in arb_params(), data in arb_data(), chunk in 1usize..=67) {
    let oneshot = Crc::calc(&p, &data);
    let mut crc = Crc::new(p);
    for part in data.chunks(chunk) {
      crc.update(part);
    }
    prop_assert_eq!(crc.finalize(), oneshot);
    prop_assert_eq!(crc.finalize(), oneshot);
  }

  #[test]
  fn split_equivalence(p in arb_params(), data in arb_data(), split in any::<usize>()) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let mut crc = Crc::new(p);
    crc.update(a);
    crc.update(b);
    prop_assert_eq!(crc.finalize(), Crc::calc(&p, &data));
  }

  #[test]
  fn byte_order_round_trip(p in arb_params(), data in arb_data()) {
    let value = Crc::calc(&p, &data);
    for order in [ByteOrder::Big, ByteOrder::Little] {
      let bytes = Crc::calc_bytes(&p, &data, order);
      prop_assert_eq!(bytes.len(), p.byte_len());
      prop_assert_eq!(bytes.to_value(order), value);
    }
    prop_assert_eq!(u128::from_str_radix(&Crc::calc_hex(&p, &data), 16).ok(), Some(value));
  }

  #[test]
  fn iterator_input_matches_slices(p in arb_params(), data in arb_data()) {
    let mut crc = Crc::new(p);
    crc.update_bytes(data.iter().copied());
    prop_assert_eq!(crc.finalize(), Crc::calc(&p, &data));
  }

  #[test]
  fn range_input_matches_slicing(p in arb_params(), data in arb_data(), a in 0usize..600, b in 0usize..600) {
    let mut crc = Crc::new(p);
    crc.update_range(&data, a..b);
    let lo = a.min(data.len());
    let hi = b.min(data.len()).max(lo);
    prop_assert_eq!(crc.finalize(), Crc::calc(&p, &data[lo..hi]));
  }

  #[test]
  fn byte_width_codewords_verify(p in arb_params(), data in arb_data()) {
    prop_assume!(p.width() % 8 == 0);
    let mut codeword = data.clone();
    codeword.extend_from_slice(&p.codeword_tail(&data));
    prop_assert!(p.verify_codeword(&codeword));

    let mut crc = Crc::new(p);
    crc.update(&data);
    let tail = crc.codeword_tail();
    crc.update(&tail);
    prop_assert!(crc.is_valid_codeword());
    prop_assert_eq!(crc.residue(), p.derived_residue());
  }
}
