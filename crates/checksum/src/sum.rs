//! Additive and XOR word checksums.
//!
//! Input bytes are assembled into `width`-bit words in the configured byte
//! order; each complete word is added modulo `2^width` ([`SumKind::Add`]) or
//! XORed ([`SumKind::Xor`]) into the running value. A partial word carries
//! over to the next `update` and is ignored by `finalize`.
//!
//! | Variant | Width | Kind | Check (big) | Check (little) |
//! |---------|-------|------|-------------|----------------|
//! | [`CHECKSUM_8`] | 8 | add | `0x85` | `0x85` |
//! | [`CHECKSUM_16`] | 16 | add | `0x0a7d` | `0x8008` |
//! | [`CHECKSUM_32`] | 32 | add | `0x8903817b` | `0x7c810388` |
//! | [`CHECKSUM_XOR_8`] | 8 | xor | `0x93` | `0x93` |
//! | [`CHECKSUM_XOR_16`] | 16 | xor | `0x089b` | `0x9b08` |
//! | [`CHECKSUM_XOR_32`] | 32 | xor | `0x74f87c63` | `0x637cf874` |
//!
//! Check values are over [`SUM_CHECK_INPUT`].

use core::fmt;

use traits::{ByteOrder, CheckBytes, CheckHex, Checksum, MAX_WIDTH, ParameterError, SelfTestError};

use crate::common::reference::width_mask;

/// Self-test input for the word checksums.
pub const SUM_CHECK_INPUT: &[u8] = &[0xDE, 0xAD, 0xBE, 0xEF, 0xAA, 0x55, 0xC2, 0x8C];

/// How complete words are accumulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SumKind {
  /// Modular addition.
  Add,
  /// Exclusive or.
  Xor,
}

/// A validated word-checksum parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SumParameters {
  width: u32,
  kind: SumKind,
  byte_order: ByteOrder,
  initial_value: u128,
  check_big: Option<u128>,
  check_little: Option<u128>,
}

impl SumParameters {
  /// Big-endian words, zero initial value.
  ///
  /// # Errors
  ///
  /// Returns [`ParameterError`] unless `width` is a positive multiple of 8 no
  /// larger than 128.
  pub const fn new(width: u32, kind: SumKind) -> Result<Self, ParameterError> {
    if width == 0 {
      return Err(ParameterError::ZeroWidth);
    }
    if width > MAX_WIDTH {
      return Err(ParameterError::width_too_large(width));
    }
    if width % 8 != 0 {
      return Err(ParameterError::WidthNotByteMultiple { width });
    }
    Ok(Self {
      width,
      kind,
      byte_order: ByteOrder::Big,
      initial_value: 0,
      check_big: None,
      check_little: None,
    })
  }

  const fn variant(width: u32, kind: SumKind, check_big: u128, check_little: u128) -> Self {
    Self {
      width,
      kind,
      byte_order: ByteOrder::Big,
      initial_value: 0,
      check_big: Some(check_big),
      check_little: Some(check_little),
    }
  }

  /// Same parameters with words assembled in `order`.
  #[must_use]
  pub const fn with_byte_order(mut self, order: ByteOrder) -> Self {
    self.byte_order = order;
    self
  }

  /// Same parameters seeded with `value`.
  ///
  /// # Errors
  ///
  /// Returns [`ParameterError::InitialValueTooWide`] when `value` does not fit.
  pub const fn with_initial_value(mut self, value: u128) -> Result<Self, ParameterError> {
    if value & !width_mask(self.width) != 0 {
      return Err(ParameterError::InitialValueTooWide {
        width: self.width,
        value,
      });
    }
    self.initial_value = value;
    Ok(self)
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  #[inline]
  #[must_use]
  pub const fn kind(&self) -> SumKind {
    self.kind
  }

  #[inline]
  #[must_use]
  pub const fn byte_order(&self) -> ByteOrder {
    self.byte_order
  }

  #[inline]
  #[must_use]
  pub const fn initial_value(&self) -> u128 {
    self.initial_value
  }

  /// Expected value over [`SUM_CHECK_INPUT`] for the configured byte order.
  #[inline]
  #[must_use]
  pub const fn check_result(&self) -> Option<u128> {
    match self.byte_order {
      ByteOrder::Big => self.check_big,
      ByteOrder::Little => self.check_little,
    }
  }

  #[must_use]
  pub fn calc(&self, data: &[u8]) -> u128 {
    let mut sum = Sum::new(*self);
    sum.update(data);
    sum.finalize()
  }

  #[must_use]
  pub fn calc_bytes(&self, data: &[u8], order: ByteOrder) -> CheckBytes {
    CheckBytes::new(self.calc(data), self.width, order)
  }

  #[must_use]
  pub fn calc_hex(&self, data: &[u8]) -> CheckHex {
    CheckHex::new(self.calc(data), self.width)
  }

  /// Compare the checksum of `data` (default [`SUM_CHECK_INPUT`]) against
  /// `expected` (default [`check_result`](Self::check_result)).
  ///
  /// # Errors
  ///
  /// Returns [`SelfTestError`] on mismatch or when no expected value exists.
  pub fn selftest(&self, data: Option<&[u8]>, expected: Option<u128>) -> Result<u128, SelfTestError> {
    let computed = self.calc(data.unwrap_or(SUM_CHECK_INPUT));
    match expected.or(self.check_result()) {
      Some(want) if want == computed => Ok(computed),
      want => Err(SelfTestError::new(computed, want, self.width)),
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine
// ─────────────────────────────────────────────────────────────────────────────

/// Streaming word checksum.
///
/// ```rust
/// use checksum::{Checksum, sum::{Sum, SumKind, SumParameters}};
///
/// let params = SumParameters::new(16, SumKind::Add)?;
/// let mut sum = Sum::new(params);
/// sum.update(&[0xDE, 0xAD, 0xBE]);
/// sum.update(&[0xEF]);
/// assert_eq!(sum.finalize(), (0xDEAD + 0xBEEF) & 0xFFFF);
/// # Ok::<(), traits::ParameterError>(())
/// ```
#[derive(Clone)]
pub struct Sum {
  params: SumParameters,
  value: u128,
  /// Partial word and the number of bytes it holds.
  word: u128,
  filled: u32,
}

impl Sum {
  #[must_use]
  pub const fn new(params: SumParameters) -> Self {
    Self {
      params,
      value: params.initial_value,
      word: 0,
      filled: 0,
    }
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &SumParameters {
    &self.params
  }

  pub fn update(&mut self, data: &[u8]) {
    let word_bytes = self.params.width / 8;
    let big = matches!(self.params.byte_order, ByteOrder::Big);
    for &b in data {
      let b = u128::from(b);
      if big {
        self.word = (self.word << 8) | b;
      } else {
        self.word |= b << (8 * self.filled);
      }
      self.filled += 1;
      if self.filled == word_bytes {
        self.fold();
      }
    }
  }

  fn fold(&mut self) {
    let mask = width_mask(self.params.width);
    self.value = match self.params.kind {
      SumKind::Add => self.value.wrapping_add(self.word) & mask,
      SumKind::Xor => (self.value ^ self.word) & mask,
    };
    self.word = 0;
    self.filled = 0;
  }

  /// Accumulated value over complete words.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u128 {
    self.value & width_mask(self.params.width)
  }

  /// Bytes of a trailing partial word not yet folded in.
  #[inline]
  #[must_use]
  pub const fn pending(&self) -> usize {
    self.filled as usize
  }

  #[inline]
  pub fn reset(&mut self) {
    self.value = self.params.initial_value;
    self.word = 0;
    self.filled = 0;
  }
}

impl Checksum for Sum {
  type Output = u128;

  #[inline]
  fn width(&self) -> u32 {
    self.params.width
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Sum::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u128 {
    Sum::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Sum::reset(self);
  }
}

impl fmt::Debug for Sum {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Sum")
      .field("width", &self.params.width)
      .field("kind", &self.params.kind)
      .field("value", &format_args!("0x{}", CheckHex::new(self.value, self.params.width)))
      .field("pending", &self.filled)
      .finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalogue
// ─────────────────────────────────────────────────────────────────────────────

/// A named word checksum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SumVariant {
  ident: &'static str,
  params: SumParameters,
}

impl SumVariant {
  #[inline]
  #[must_use]
  pub const fn ident(&self) -> &'static str {
    self.ident
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &SumParameters {
    &self.params
  }

  /// Parameters for words assembled in `order`.
  #[inline]
  #[must_use]
  pub const fn with_byte_order(&self, order: ByteOrder) -> SumParameters {
    self.params.with_byte_order(order)
  }

  /// A fresh big-endian engine.
  #[inline]
  #[must_use]
  pub const fn engine(&self) -> Sum {
    Sum::new(self.params)
  }

  #[inline]
  #[must_use]
  pub fn calc(&self, data: &[u8]) -> u128 {
    self.params.calc(data)
  }

  /// See [`SumParameters::selftest`].
  ///
  /// # Errors
  ///
  /// Returns [`SelfTestError`] when the computed value does not match.
  #[inline]
  pub fn selftest(&self, data: Option<&[u8]>, expected: Option<u128>) -> Result<u128, SelfTestError> {
    self.params.selftest(data, expected)
  }
}

pub const CHECKSUM_8: SumVariant = SumVariant {
  ident: "Checksum8",
  params: SumParameters::variant(8, SumKind::Add, 0x85, 0x85),
};

pub const CHECKSUM_16: SumVariant = SumVariant {
  ident: "Checksum16",
  params: SumParameters::variant(16, SumKind::Add, 0x0A7D, 0x8008),
};

pub const CHECKSUM_32: SumVariant = SumVariant {
  ident: "Checksum32",
  params: SumParameters::variant(32, SumKind::Add, 0x8903_817B, 0x7C81_0388),
};

pub const CHECKSUM_XOR_8: SumVariant = SumVariant {
  ident: "ChecksumXor8",
  params: SumParameters::variant(8, SumKind::Xor, 0x93, 0x93),
};

pub const CHECKSUM_XOR_16: SumVariant = SumVariant {
  ident: "ChecksumXor16",
  params: SumParameters::variant(16, SumKind::Xor, 0x089B, 0x9B08),
};

pub const CHECKSUM_XOR_32: SumVariant = SumVariant {
  ident: "ChecksumXor32",
  params: SumParameters::variant(32, SumKind::Xor, 0x74F8_7C63, 0x637C_F874),
};

/// Every named word checksum.
pub static SUM_CATALOG: &[SumVariant] = &[
  CHECKSUM_8,
  CHECKSUM_16,
  CHECKSUM_32,
  CHECKSUM_XOR_8,
  CHECKSUM_XOR_16,
  CHECKSUM_XOR_32,
];
