//! Filter CRC parameter sets by any subset of their fields.
//!
//! A [`CrcFilter`] holds one optional constraint per field. Unset fields match
//! anything; set fields must be equal. Filtering preserves candidate order and
//! never fails: no match is an empty result.
//!
//! ```rust
//! use checksum::find::{CrcFilter, find_in_catalog};
//!
//! let hits = find_in_catalog(&CrcFilter::new().width(32).polynomial(0x04C1_1DB7));
//! assert!(hits.iter().all(|v| v.width() == 32));
//! assert!(hits.iter().any(|v| v.ident() == "Crc32IsoHdlc"));
//! ```

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::crc::CrcParameters;

/// Field constraints for [`find`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct CrcFilter {
  pub width: Option<u32>,
  pub polynomial: Option<u128>,
  pub initial_value: Option<u128>,
  pub reflect_input: Option<bool>,
  pub reflect_output: Option<bool>,
  pub xor_output: Option<u128>,
  pub check_result: Option<u128>,
  pub residue: Option<u128>,
}

impl CrcFilter {
  /// A filter that matches everything.
  pub const fn new() -> Self {
    Self {
      width: None,
      polynomial: None,
      initial_value: None,
      reflect_input: None,
      reflect_output: None,
      xor_output: None,
      check_result: None,
      residue: None,
    }
  }

  pub const fn width(mut self, width: u32) -> Self {
    self.width = Some(width);
    self
  }

  pub const fn polynomial(mut self, polynomial: u128) -> Self {
    self.polynomial = Some(polynomial);
    self
  }

  pub const fn initial_value(mut self, value: u128) -> Self {
    self.initial_value = Some(value);
    self
  }

  pub const fn reflect_input(mut self, reflect: bool) -> Self {
    self.reflect_input = Some(reflect);
    self
  }

  pub const fn reflect_output(mut self, reflect: bool) -> Self {
    self.reflect_output = Some(reflect);
    self
  }

  pub const fn xor_output(mut self, value: u128) -> Self {
    self.xor_output = Some(value);
    self
  }

  pub const fn check_result(mut self, value: u128) -> Self {
    self.check_result = Some(value);
    self
  }

  pub const fn residue(mut self, value: u128) -> Self {
    self.residue = Some(value);
    self
  }

  /// Whether no field is constrained.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.width.is_none()
      && self.polynomial.is_none()
      && self.initial_value.is_none()
      && self.reflect_input.is_none()
      && self.reflect_output.is_none()
      && self.xor_output.is_none()
      && self.check_result.is_none()
      && self.residue.is_none()
  }

  /// Whether `params` satisfies every set constraint.
  ///
  /// `check_result` and `residue` constraints only match parameter sets that
  /// declare an equal value.
  #[must_use]
  pub fn matches(&self, params: &CrcParameters) -> bool {
    fn field<T: PartialEq>(want: Option<T>, have: T) -> bool {
      want.is_none_or(|w| w == have)
    }
    fn declared<T: PartialEq>(want: Option<T>, have: Option<T>) -> bool {
      match want {
        None => true,
        Some(w) => have.is_some_and(|h| h == w),
      }
    }

    field(self.width, params.width)
      && field(self.polynomial, params.polynomial)
      && field(self.initial_value, params.initial_value)
      && field(self.reflect_input, params.reflect_input)
      && field(self.reflect_output, params.reflect_output)
      && field(self.xor_output, params.xor_output)
      && declared(self.check_result, params.check_result)
      && declared(self.residue, params.residue)
  }

  /// Lazily filter `candidates`, preserving order.
  pub fn iter<I>(self, candidates: I) -> impl Iterator<Item = I::Item>
  where
    I: IntoIterator,
    I::Item: AsRef<CrcParameters>,
  {
    candidates.into_iter().filter(move |c| self.matches(c.as_ref()))
  }
}

/// Candidates satisfying `filter`, in input order.
///
/// With an empty filter the result is the input, unchanged and in order.
#[cfg(feature = "alloc")]
#[must_use]
pub fn find<I>(candidates: I, filter: &CrcFilter) -> Vec<I::Item>
where
  I: IntoIterator,
  I::Item: AsRef<CrcParameters>,
{
  filter.iter(candidates).collect()
}

/// [`find`] over the whole catalogue.
#[cfg(feature = "alloc")]
#[must_use]
pub fn find_in_catalog(filter: &CrcFilter) -> Vec<&'static crate::catalog::CrcVariant> {
  find(crate::catalog::CATALOG, filter)
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
  use super::*;
  use crate::catalog::{
    CATALOG, CRC_8_SMBUS, CRC_16_ARC, CRC_16_KERMIT, CRC_16_XMODEM, CRC_32_ISO_HDLC, CrcVariant,
  };

  #[test]
  fn empty_filter_returns_input_unchanged() {
    let all = find(CATALOG, &CrcFilter::new());
    assert_eq!(all.len(), CATALOG.len());
    assert!(all.iter().zip(CATALOG).all(|(a, b)| core::ptr::eq(*a, b)));
  }

  #[test]
  fn width_filter_preserves_order() {
    let hits = find(CATALOG, &CrcFilter::new().width(32));
    let expected: Vec<&CrcVariant> = CATALOG.iter().filter(|v| v.width() == 32).collect();
    assert_eq!(hits, expected);
    assert_eq!(hits.len(), 12);
  }

  #[test]
  fn explicit_candidates_keep_their_order() {
    let candidates = [CRC_32_ISO_HDLC, CRC_16_XMODEM, CRC_16_KERMIT, CRC_8_SMBUS, CRC_16_ARC];
    let hits = find(candidates, &CrcFilter::new().width(16));
    assert_eq!(hits, [CRC_16_XMODEM, CRC_16_KERMIT, CRC_16_ARC]);
  }

  #[test]
  fn combined_fields() {
    let hits = find_in_catalog(
      &CrcFilter::new()
        .width(16)
        .polynomial(0x1021)
        .reflect_input(true)
        .reflect_output(true),
    );
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|v| v.params().polynomial() == 0x1021 && v.params().reflect_input()));
    assert!(hits.iter().any(|v| v.ident() == "Crc16Kermit"));
  }

  #[test]
  fn check_and_residue_filters() {
    let hits = find_in_catalog(&CrcFilter::new().check_result(0xCBF4_3926));
    assert_eq!(hits, [&CRC_32_ISO_HDLC]);

    let hits = find_in_catalog(&CrcFilter::new().residue(0xDEBB_20E3));
    assert_eq!(hits, [&CRC_32_ISO_HDLC]);
  }

  #[test]
  fn no_match_is_empty() {
    assert!(find_in_catalog(&CrcFilter::new().width(99)).is_empty());
    assert!(find(core::iter::empty::<CrcVariant>(), &CrcFilter::new()).is_empty());
  }

  #[test]
  fn adhoc_parameters_without_metadata() {
    let adhoc = CrcParameters::new(21, 0xDEAD).unwrap();
    assert_eq!(find([adhoc], &CrcFilter::new().width(21)).len(), 1);
    assert!(find([adhoc], &CrcFilter::new().check_result(0)).is_empty());
  }

  #[test]
  fn is_empty_tracks_fields() {
    assert!(CrcFilter::new().is_empty());
    assert!(!CrcFilter::new().residue(0).is_empty());
  }
}
