//! Catalogue of named CRC variants.
//!
//! This module provides:
//! - [`CATALOG`] - every RevEng catalogue entry, ordered by width then name
//! - One constant per entry (e.g. [`CRC_32_ISO_HDLC`])
//! - [`lookup`] / [`aliases`] - name resolution including legacy identifiers
//!
//! Variants are data, not types: an entry is a [`CrcParameters`] value plus
//! its catalogue name and a stable identifier. Equality is structural, so two
//! differently named entries with the same parameters compare equal.
//!
//! # Example
//!
//! ```rust
//! use checksum::catalog::{self, CRC_32_ISO_HDLC};
//!
//! assert_eq!(CRC_32_ISO_HDLC.calc(b"123456789"), 0xCBF4_3926);
//! assert_eq!(catalog::lookup("Crc32"), Some(&CRC_32_ISO_HDLC));
//! assert_eq!(catalog::lookup("crc-32/iso-hdlc"), Some(&CRC_32_ISO_HDLC));
//! ```

// SAFETY: All array indexing uses bounded loop indices in const fn contexts.
#![allow(clippy::indexing_slicing)]

mod aliases;
mod variants;

use core::{
  fmt,
  hash::{Hash, Hasher},
};

use aliases::LEGACY;
use traits::{ByteOrder, CheckBytes, CheckHex, SelfTestError};
pub use variants::*;

use crate::crc::{Crc, CrcParameters};

/// A named catalogue entry.
#[derive(Clone, Copy, Debug)]
pub struct CrcVariant {
  pub(crate) name: &'static str,
  pub(crate) ident: &'static str,
  pub(crate) params: CrcParameters,
}

impl CrcVariant {
  /// Catalogue name, e.g. `CRC-32/ISO-HDLC`.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Stable identifier, e.g. `Crc32IsoHdlc`.
  #[inline]
  #[must_use]
  pub const fn ident(&self) -> &'static str {
    self.ident
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParameters {
    &self.params
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.params.width
  }

  /// A fresh engine for this variant.
  #[inline]
  #[must_use]
  pub fn engine(&self) -> Crc {
    Crc::new(self.params)
  }

  #[inline]
  #[must_use]
  pub fn calc(&self, data: &[u8]) -> u128 {
    self.params.calc(data)
  }

  #[inline]
  #[must_use]
  pub fn calc_bytes(&self, data: &[u8], order: ByteOrder) -> CheckBytes {
    self.params.calc_bytes(data, order)
  }

  #[inline]
  #[must_use]
  pub fn calc_hex(&self, data: &[u8]) -> CheckHex {
    self.params.calc_hex(data)
  }

  /// See [`CrcParameters::selftest`].
  ///
  /// # Errors
  ///
  /// Returns [`SelfTestError`] when the computed value does not match.
  #[inline]
  pub fn selftest(&self, data: Option<&[u8]>, expected: Option<u128>) -> Result<u128, SelfTestError> {
    self.params.selftest(data, expected)
  }

  /// See [`CrcParameters::codeword_tail`].
  #[inline]
  #[must_use]
  pub fn codeword_tail(&self, data: &[u8]) -> CheckBytes {
    self.params.codeword_tail(data)
  }

  #[inline]
  #[must_use]
  pub fn verify_codeword(&self, codeword: &[u8]) -> bool {
    self.params.verify_codeword(codeword)
  }
}

impl PartialEq for CrcVariant {
  fn eq(&self, other: &Self) -> bool {
    self.params == other.params
  }
}

impl Eq for CrcVariant {}

impl PartialEq<CrcParameters> for CrcVariant {
  fn eq(&self, other: &CrcParameters) -> bool {
    self.params == *other
  }
}

impl PartialEq<CrcVariant> for CrcParameters {
  fn eq(&self, other: &CrcVariant) -> bool {
    *self == other.params
  }
}

impl Hash for CrcVariant {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.params.hash(state);
  }
}

impl AsRef<CrcParameters> for CrcVariant {
  #[inline]
  fn as_ref(&self) -> &CrcParameters {
    &self.params
  }
}

impl From<CrcVariant> for CrcParameters {
  #[inline]
  fn from(variant: CrcVariant) -> Self {
    variant.params
  }
}

impl fmt::Display for CrcVariant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lookup
// ─────────────────────────────────────────────────────────────────────────────

/// Every catalogue entry, ordered by width then name.
pub static CATALOG: &[CrcVariant] = VARIANTS;

/// Find an entry by its stable identifier (exact match).
#[must_use]
pub fn by_ident(ident: &str) -> Option<&'static CrcVariant> {
  CATALOG.iter().find(|v| v.ident == ident)
}

/// Find an entry by catalogue name (ASCII case-insensitive).
#[must_use]
pub fn by_name(name: &str) -> Option<&'static CrcVariant> {
  CATALOG.iter().find(|v| v.name.eq_ignore_ascii_case(name))
}

/// Resolve an identifier, a legacy alias or a catalogue name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static CrcVariant> {
  by_ident(name)
    .or_else(|| {
      LEGACY
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .and_then(|(_, canonical)| by_ident(canonical))
    })
    .or_else(|| by_name(name))
}

/// Every identifier the catalogue answers to, with its entry.
///
/// Yields all canonical identifiers in catalogue order, followed by the
/// legacy aliases, so the set of names is a superset of the canonical ones.
pub fn aliases() -> impl Iterator<Item = (&'static str, &'static CrcVariant)> {
  let canonical = CATALOG.iter().map(|v| (v.ident, v));
  let legacy = LEGACY
    .iter()
    .filter_map(|&(legacy, canonical)| by_ident(canonical).map(|v| (legacy, v)));
  canonical.chain(legacy)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Name Checks
// ─────────────────────────────────────────────────────────────────────────────

const fn str_eq(a: &str, b: &str) -> bool {
  let (a, b) = (a.as_bytes(), b.as_bytes());
  if a.len() != b.len() {
    return false;
  }
  let mut i = 0;
  while i < a.len() {
    if a[i] != b[i] {
      return false;
    }
    i += 1;
  }
  true
}

const fn ident_index(ident: &str) -> Option<usize> {
  let mut i = 0;
  while i < VARIANTS.len() {
    if str_eq(VARIANTS[i].ident, ident) {
      return Some(i);
    }
    i += 1;
  }
  None
}

// Identifiers are unique, legacy names never shadow a canonical identifier,
// and every legacy row points at an existing entry.
const _: () = {
  let mut i = 0;
  while i < VARIANTS.len() {
    assert!(matches!(ident_index(VARIANTS[i].ident), Some(j) if j == i));
    i += 1;
  }
  let mut i = 0;
  while i < LEGACY.len() {
    assert!(ident_index(LEGACY[i].0).is_none());
    assert!(ident_index(LEGACY[i].1).is_some());
    i += 1;
  }
};

#[cfg(test)]
mod tests {
  extern crate std;

  use std::{collections::HashSet, vec::Vec};

  use super::*;

  #[test]
  fn catalogue_size_and_order() {
    assert_eq!(CATALOG.len(), 113);
    assert_eq!(CATALOG.first().map(|v| v.name), Some("CRC-3/GSM"));
    assert_eq!(CATALOG.last().map(|v| v.name), Some("CRC-82/DARC"));
    assert!(CATALOG.windows(2).all(|w| w[0].width() <= w[1].width()));
  }

  #[test]
  fn lookup_forms() {
    assert_eq!(lookup("Crc32IsoHdlc").map(CrcVariant::name), Some("CRC-32/ISO-HDLC"));
    assert_eq!(lookup("Crc32").map(CrcVariant::name), Some("CRC-32/ISO-HDLC"));
    assert_eq!(lookup("Crc16CcittFalse").map(CrcVariant::name), Some("CRC-16/IBM-3740"));
    assert_eq!(lookup("CrcXmodem").map(CrcVariant::name), Some("CRC-16/XMODEM"));
    assert_eq!(lookup("Crc64").map(CrcVariant::name), Some("CRC-64/ECMA-182"));
    assert_eq!(lookup("crc-64/go-iso").map(CrcVariant::ident), Some("Crc64GoIso"));
    assert_eq!(lookup("Crc99Nope"), None);
  }

  #[test]
  fn by_ident_is_exact() {
    assert!(by_ident("Crc32IsoHdlc").is_some());
    assert!(by_ident("crc32isohdlc").is_none());
  }

  #[test]
  fn aliases_are_superset_of_catalogue() {
    let names: HashSet<&str> = aliases().map(|(n, _)| n).collect();
    for v in CATALOG {
      assert!(names.contains(v.ident), "{} missing", v.ident);
    }
    assert_eq!(aliases().count(), CATALOG.len() + LEGACY.len());
  }

  #[test]
  fn aliases_share_parameters() {
    for (name, variant) in aliases() {
      assert_eq!(lookup(name), Some(variant), "{name}");
    }
  }

  #[test]
  fn equality_is_structural() {
    // Same parameters under two names would compare equal; distinct ones do not.
    assert_ne!(CRC_32_ISO_HDLC, CRC_32_JAMCRC);
    let adhoc = CrcParameters::builder(32, 0x04C1_1DB7)
      .initial_value(0xFFFF_FFFF)
      .reflected(true)
      .xor_output(0xFFFF_FFFF)
      .build()
      .unwrap();
    assert_eq!(CRC_32_ISO_HDLC, adhoc);
    assert_eq!(adhoc, CRC_32_ISO_HDLC);
  }

  #[test]
  fn idents_are_unique() {
    let idents: Vec<&str> = CATALOG.iter().map(CrcVariant::ident).collect();
    let unique: HashSet<&str> = idents.iter().copied().collect();
    assert_eq!(unique.len(), idents.len());
  }

  #[test]
  fn display_is_catalogue_name() {
    assert_eq!(std::format!("{CRC_64_GO_ISO}"), "CRC-64/GO-ISO");
  }
}
