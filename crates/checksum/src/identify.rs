//! Identify which CRC variant produced an observed value.
//!
//! Brute force over a candidate set: every candidate gets a fresh [`Crc`], is
//! fed `data`, and is kept when its finished value equals the observed one.
//! Candidate order is preserved, so results are deterministic.
//!
//! | Function | Candidates | Result |
//! |----------|------------|--------|
//! | [`first`] | catalogue | first match |
//! | [`all`] | catalogue | every match |
//! | [`first_in`] | caller supplied | first match |
//! | [`all_in`] | caller supplied | every match |
//!
//! An optional `width` restricts candidates through [`CrcFilter`] before any
//! CRC is computed. It never changes which candidates of that width match.
//!
//! ```rust
//! use checksum::{catalog::CRC_16_MODBUS, identify};
//!
//! let observed = CRC_16_MODBUS.calc(b"hello");
//! let hit = identify::first(b"hello", observed, Some(16));
//! assert_eq!(hit.map(|v| v.calc(b"hello")), Some(observed));
//! ```

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::{
  catalog::{CATALOG, CrcVariant},
  crc::{Crc, CrcParameters},
  find::CrcFilter,
};

fn width_filter(width: Option<u32>) -> CrcFilter {
  match width {
    Some(w) => CrcFilter::new().width(w),
    None => CrcFilter::new(),
  }
}

fn produces(params: &CrcParameters, data: &[u8], value: u128) -> bool {
  let mut crc = Crc::new(*params);
  crc.update(data);
  crc.finalize() == value
}

/// First candidate whose CRC of `data` equals `value`.
#[must_use]
pub fn first_in<I>(candidates: I, data: &[u8], value: u128, width: Option<u32>) -> Option<I::Item>
where
  I: IntoIterator,
  I::Item: AsRef<CrcParameters>,
{
  width_filter(width)
    .iter(candidates)
    .find(|c| produces(c.as_ref(), data, value))
}

/// Every candidate whose CRC of `data` equals `value`, in candidate order.
#[cfg(feature = "alloc")]
#[must_use]
pub fn all_in<I>(candidates: I, data: &[u8], value: u128, width: Option<u32>) -> Vec<I::Item>
where
  I: IntoIterator,
  I::Item: AsRef<CrcParameters>,
{
  width_filter(width)
    .iter(candidates)
    .filter(|c| produces(c.as_ref(), data, value))
    .collect()
}

/// [`first_in`] over the whole catalogue.
#[must_use]
pub fn first(data: &[u8], value: u128, width: Option<u32>) -> Option<&'static CrcVariant> {
  first_in(CATALOG, data, value, width)
}

/// [`all_in`] over the whole catalogue.
#[cfg(feature = "alloc")]
#[must_use]
pub fn all(data: &[u8], value: u128, width: Option<u32>) -> Vec<&'static CrcVariant> {
  all_in(CATALOG, data, value, width)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{CRC_16_ARC, CRC_16_XMODEM, CRC_32_ISO_HDLC, CRC_64_GO_ISO};

  #[test]
  fn identifies_catalogue_entry() {
    let data = b"identify me";
    let value = CRC_32_ISO_HDLC.calc(data);
    let hit = first(data, value, None);
    assert_eq!(hit, Some(&CRC_32_ISO_HDLC));
    assert_eq!(hit.map(|v| v.calc(data)), Some(value));
  }

  #[test]
  fn width_prefilter() {
    let data = b"123456789";
    assert_eq!(first(data, 0xB909_56C7_75A4_1001, Some(64)), Some(&CRC_64_GO_ISO));
    assert_eq!(first(data, 0xB909_56C7_75A4_1001, Some(32)), None);
  }

  #[test]
  fn empty_candidates() {
    let none: [CrcVariant; 0] = [];
    assert_eq!(first_in(none, b"Test", 0, None), None);
  }

  #[test]
  fn explicit_candidates_in_order() {
    let data = b"123456789";
    let candidates = [CRC_16_ARC, CRC_16_XMODEM];
    assert_eq!(first_in(candidates, data, 0x31C3, None), Some(CRC_16_XMODEM));
    assert_eq!(first_in(candidates, data, 0x31C3, Some(8)), None);
  }

  #[cfg(feature = "alloc")]
  #[test]
  fn all_matches_and_empty() {
    let data = b"123456789";
    let hits = all(data, 0xCBF4_3926, None);
    assert_eq!(hits, [&CRC_32_ISO_HDLC]);

    let none: [CrcVariant; 0] = [];
    assert!(all_in(none, b"Test", 0, None).is_empty());
  }

  #[cfg(feature = "alloc")]
  #[test]
  fn prefilter_agrees_with_full_scan() {
    // Many catalogue entries map an all-zero message to zero.
    let data = [0u8; 4];
    for width in [8u32, 16, 32] {
      let filtered = all(&data, 0, Some(width));
      let scanned: Vec<_> = all(&data, 0, None).into_iter().filter(|v| v.width() == width).collect();
      assert_eq!(filtered, scanned, "width {width}");
      assert!(!filtered.is_empty());
    }
  }
}
