//! Fuzz target for the identifier.
//!
//! Every catalogue entry must identify itself (or a structural twin) from
//! any message, and every reported match must reproduce the value.

#![no_main]

use checksum::{CATALOG, identify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, Vec<u8>)| {
  let (pick, data) = input;
  let Some(variant) = CATALOG.get(usize::from(pick) % CATALOG.len()) else {
    return;
  };

  let observed = variant.calc(&data);
  let hits = identify::all(&data, observed, Some(variant.width()));
  assert!(hits.contains(&variant), "{} not identified", variant.name());
  for hit in hits {
    assert_eq!(hit.calc(&data), observed, "{} false positive", hit.name());
  }
});
