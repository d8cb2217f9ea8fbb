//! Property-based tests over the public API.
//!
//! These tests verify invariants that must hold for all inputs, not just
//! specific test vectors. Uses proptest for randomized input generation.

use checksum::{
  ByteOrder, CATALOG, Checksum, CrcVariant,
  find::CrcFilter,
  identify,
  sum::{SUM_CATALOG, Sum, SumKind, SumParameters},
};
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 4KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..4096)
}

/// Generate multiple split points for chunked testing.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort();
    splits.push(len);
    splits.dedup();
    splits
  })
}

fn arb_variant() -> impl Strategy<Value = &'static CrcVariant> {
  (0..CATALOG.len()).prop_map(|i| &CATALOG[i])
}

fn arb_sum() -> impl Strategy<Value = SumParameters> {
  (1u32..=16, prop_oneof![Just(SumKind::Add), Just(SumKind::Xor)], any::<bool>()).prop_map(|(bytes, kind, little)| {
    let order = if little { ByteOrder::Little } else { ByteOrder::Big };
    SumParameters::new(bytes * 8, kind)
      .map(|p| p.with_byte_order(order))
      .unwrap()
  })
}

// Generic Property Tests

fn oneshot<C: Checksum>(fresh: &C, data: &[u8]) -> C::Output {
  let mut h = fresh.clone();
  h.update(data);
  h.finalize()
}

/// Multiple incremental updates produce the one-shot result.
fn prop_multi_incremental<C: Checksum>(fresh: &C, data: &[u8], splits: &[usize]) -> bool {
  let mut hasher = fresh.clone();
  let mut prev = 0;
  for &split in splits {
    let split = split.min(data.len());
    if split > prev {
      hasher.update(&data[prev..split]);
      prev = split;
    }
  }
  if prev < data.len() {
    hasher.update(&data[prev..]);
  }

  hasher.finalize() == oneshot(fresh, data)
}

/// Reset returns the engine to its initial state.
fn prop_reset_works<C: Checksum>(fresh: &C, data: &[u8]) -> bool {
  let mut hasher = fresh.clone();
  hasher.update(data);
  hasher.reset();
  hasher.update(data);

  hasher.finalize() == oneshot(fresh, data)
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn crc_multi_incremental(v in arb_variant(), data in arb_data(), splits in arb_splits(4096, 5)) {
    prop_assert!(prop_multi_incremental(&v.engine(), &data, &splits));
  }

  #[test]
  fn crc_reset(v in arb_variant(), data in arb_data()) {
    prop_assert!(prop_reset_works(&v.engine(), &data));
  }

  #[test]
  fn crc_hex_matches_value(v in arb_variant(), data in arb_data()) {
    let hex = v.calc_hex(&data);
    prop_assert_eq!(u128::from_str_radix(&hex, 16).ok(), Some(v.calc(&data)));
  }

  #[test]
  fn identify_finds_generating_variant(v in arb_variant(), data in prop::collection::vec(any::<u8>(), 1..64)) {
    let observed = v.calc(&data);
    let first = identify::first(&data, observed, Some(v.width()));
    prop_assert!(first.is_some());
    prop_assert_eq!(first.map(|f| f.calc(&data)), Some(observed));
    prop_assert!(identify::all(&data, observed, None).contains(&v));
  }

  #[test]
  fn filter_matches_own_fields(v in arb_variant()) {
    let p = v.params();
    let filter = CrcFilter::new()
      .width(p.width())
      .polynomial(p.polynomial())
      .initial_value(p.initial_value())
      .reflect_input(p.reflect_input())
      .reflect_output(p.reflect_output())
      .xor_output(p.xor_output());
    prop_assert!(filter.matches(p));
    prop_assert!(!filter.width(p.width() + 1).matches(p));
  }

  #[test]
  fn sum_multi_incremental(p in arb_sum(), data in arb_data(), splits in arb_splits(4096, 5)) {
    prop_assert!(prop_multi_incremental(&Sum::new(p), &data, &splits));
  }

  #[test]
  fn sum_reset(p in arb_sum(), data in arb_data()) {
    prop_assert!(prop_reset_works(&Sum::new(p), &data));
  }

  #[test]
  fn sum_ignores_trailing_partial_word(p in arb_sum(), data in arb_data()) {
    let word = (p.width() / 8) as usize;
    let whole = data.len() - data.len() % word;
    prop_assert_eq!(p.calc(&data), p.calc(&data[..whole]));
  }

  #[test]
  fn sum_xor_is_self_inverse(data in arb_data()) {
    for v in SUM_CATALOG.iter().filter(|v| v.params().kind() == SumKind::Xor) {
      let word = (v.params().width() / 8) as usize;
      let whole = data.len() - data.len() % word;
      let mut doubled = data[..whole].to_vec();
      doubled.extend_from_slice(&data[..whole]);
      prop_assert_eq!(v.calc(&doubled), 0);
    }
  }
}
