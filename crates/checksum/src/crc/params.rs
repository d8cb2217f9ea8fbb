//! CRC parameter sets (Rocksoft model).

use core::hash::{Hash, Hasher};

use traits::{ByteOrder, CheckBytes, CheckHex, MAX_WIDTH, ParameterError, SelfTestError};

use crate::common::{
  reference::{self, CHECK_INPUT, expand, shift_zeros, width_mask},
  reflect::reflect,
};

/// A validated CRC parameter set.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `width` | Register width in bits, `1..=128` |
/// | `polynomial` | Generator polynomial, top bit implicit |
/// | `initial_value` | Register seed |
/// | `reflect_input` | Bit-reverse each input byte |
/// | `reflect_output` | Bit-reverse the register before the output XOR |
/// | `xor_output` | Mask XORed into the finished value |
/// | `check_result` | CRC of ASCII `"123456789"`, if known |
/// | `residue` | Register left by a valid codeword, if known |
///
/// Equality and hashing use the six defining fields only. `check_result` and
/// `residue` are descriptive metadata.
///
/// # Examples
///
/// ```
/// use checksum::CrcParameters;
///
/// let p = CrcParameters::builder(16, 0x1021)
///   .initial_value(0xFFFF)
///   .check_result(0x29B1)
///   .build()?;
/// assert_eq!(p.calc(b"123456789"), 0x29B1);
/// assert!(p.selftest(None, None).is_ok());
/// # Ok::<(), traits::ParameterError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CrcParameters {
  pub(crate) width: u32,
  pub(crate) polynomial: u128,
  pub(crate) initial_value: u128,
  pub(crate) reflect_input: bool,
  pub(crate) reflect_output: bool,
  pub(crate) xor_output: u128,
  pub(crate) check_result: Option<u128>,
  pub(crate) residue: Option<u128>,
}

impl CrcParameters {
  /// Parameters with zero init, no reflection and zero output XOR.
  ///
  /// # Errors
  ///
  /// Returns [`ParameterError`] when `width` is outside `1..=128` or
  /// `polynomial` does not fit in `width` bits.
  pub const fn new(width: u32, polynomial: u128) -> Result<Self, ParameterError> {
    Self::builder(width, polynomial).build()
  }

  /// Start building a parameter set.
  #[inline]
  #[must_use]
  pub const fn builder(width: u32, polynomial: u128) -> CrcParametersBuilder {
    CrcParametersBuilder {
      params: Self {
        width,
        polynomial,
        initial_value: 0,
        reflect_input: false,
        reflect_output: false,
        xor_output: 0,
        check_result: None,
        residue: None,
      },
    }
  }

  /// Check the width and that every constant fits in it.
  ///
  /// # Errors
  ///
  /// Returns the first violated constraint.
  pub const fn validate(&self) -> Result<(), ParameterError> {
    let width = self.width;
    if width == 0 {
      return Err(ParameterError::ZeroWidth);
    }
    if width > MAX_WIDTH {
      return Err(ParameterError::width_too_large(width));
    }
    let excess = !width_mask(width);
    if self.polynomial & excess != 0 {
      return Err(ParameterError::PolynomialTooWide {
        width,
        value: self.polynomial,
      });
    }
    if self.initial_value & excess != 0 {
      return Err(ParameterError::InitialValueTooWide {
        width,
        value: self.initial_value,
      });
    }
    if self.xor_output & excess != 0 {
      return Err(ParameterError::XorOutputTooWide {
        width,
        value: self.xor_output,
      });
    }
    Ok(())
  }

  /// Same parameters seeded with `value`.
  ///
  /// The check value no longer applies and is dropped. The residue does not
  /// depend on the seed and is kept.
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
    if value != self.initial_value {
      self.initial_value = value;
      self.check_result = None;
    }
    Ok(self)
  }

  // ───────────────────────────────────────────────────────────────────────
  // Accessors
  // ───────────────────────────────────────────────────────────────────────

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u128 {
    self.polynomial
  }

  #[inline]
  #[must_use]
  pub const fn initial_value(&self) -> u128 {
    self.initial_value
  }

  #[inline]
  #[must_use]
  pub const fn reflect_input(&self) -> bool {
    self.reflect_input
  }

  #[inline]
  #[must_use]
  pub const fn reflect_output(&self) -> bool {
    self.reflect_output
  }

  #[inline]
  #[must_use]
  pub const fn xor_output(&self) -> u128 {
    self.xor_output
  }

  #[inline]
  #[must_use]
  pub const fn check_result(&self) -> Option<u128> {
    self.check_result
  }

  #[inline]
  #[must_use]
  pub const fn residue(&self) -> Option<u128> {
    self.residue
  }

  /// Mask covering `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u128 {
    width_mask(self.width)
  }

  /// Bytes needed to hold a finished value.
  #[inline]
  #[must_use]
  pub const fn byte_len(&self) -> usize {
    traits::output::byte_len(self.width)
  }

  // ───────────────────────────────────────────────────────────────────────
  // One-shot Computation
  // ───────────────────────────────────────────────────────────────────────

  /// CRC of `data` using a fresh engine.
  #[inline]
  #[must_use]
  pub fn calc(&self, data: &[u8]) -> u128 {
    super::Crc::calc(self, data)
  }

  /// CRC of `data` packed into [`byte_len`](Self::byte_len) bytes.
  #[inline]
  #[must_use]
  pub fn calc_bytes(&self, data: &[u8], order: ByteOrder) -> CheckBytes {
    CheckBytes::new(self.calc(data), self.width, order)
  }

  /// CRC of `data` as fixed-width lowercase hex.
  #[inline]
  #[must_use]
  pub fn calc_hex(&self, data: &[u8]) -> CheckHex {
    CheckHex::new(self.calc(data), self.width)
  }

  /// Compare the CRC of `data` against an expected value.
  ///
  /// `data` defaults to ASCII `"123456789"` and `expected` defaults to
  /// [`check_result`](Self::check_result).
  ///
  /// # Errors
  ///
  /// Returns [`SelfTestError`] carrying the computed value when it differs
  /// from the expected one, or when no expected value is available.
  pub fn selftest(&self, data: Option<&[u8]>, expected: Option<u128>) -> Result<u128, SelfTestError> {
    let computed = self.calc(data.unwrap_or(CHECK_INPUT));
    match expected.or(self.check_result) {
      Some(want) if want == computed => Ok(computed),
      want => Err(SelfTestError::new(computed, want, self.width)),
    }
  }

  // ───────────────────────────────────────────────────────────────────────
  // Residue
  // ───────────────────────────────────────────────────────────────────────

  /// Residue implied by the parameters.
  ///
  /// This is the register (reflected when `reflect_output` is set) that a
  /// valid codeword leaves behind: the output XOR mask mapped back into the
  /// register domain, followed by `width` zero bits of division.
  #[must_use]
  pub const fn derived_residue(&self) -> u128 {
    let width = self.width;
    let xor_register = if self.reflect_output {
      reflect(self.xor_output, width)
    } else {
      self.xor_output
    };
    let register = shift_zeros(expand(xor_register, width), expand(self.polynomial, width), width);
    let residue = reference::contract(register, width);
    if self.reflect_output {
      reflect(residue, width)
    } else {
      residue
    }
  }

  /// Byte order in which a CRC is appended to its message.
  ///
  /// Reflected-input variants consume each byte low bit first, so the tail
  /// goes low byte first.
  #[inline]
  #[must_use]
  pub const fn codeword_order(&self) -> ByteOrder {
    if self.reflect_input {
      ByteOrder::Little
    } else {
      ByteOrder::Big
    }
  }

  /// Value appended after a message whose finished CRC is `crc`.
  ///
  /// Equal to `crc` unless exactly one reflection flag is set, in which case
  /// the bits are reversed over `width` so the register sees them in
  /// transmission order.
  #[inline]
  #[must_use]
  pub const fn codeword_value(&self, crc: u128) -> u128 {
    if self.reflect_input != self.reflect_output {
      reflect(crc & self.mask(), self.width)
    } else {
      crc & self.mask()
    }
  }

  /// Tail bytes that turn `data` into a codeword.
  #[inline]
  #[must_use]
  pub fn codeword_tail(&self, data: &[u8]) -> CheckBytes {
    CheckBytes::new(self.codeword_value(self.calc(data)), self.width, self.codeword_order())
  }

  /// Check whether `codeword` is a message followed by its tail.
  ///
  /// The tail is [`codeword_tail`](Self::codeword_tail) of the message. Only
  /// whole-byte widths form codewords, so this returns `false` for any other
  /// width.
  #[must_use]
  pub fn verify_codeword(&self, codeword: &[u8]) -> bool {
    let mut crc = super::Crc::new(*self);
    crc.update(codeword);
    crc.is_valid_codeword()
  }
}

impl PartialEq for CrcParameters {
  fn eq(&self, other: &Self) -> bool {
    self.width == other.width
      && self.polynomial == other.polynomial
      && self.initial_value == other.initial_value
      && self.reflect_input == other.reflect_input
      && self.reflect_output == other.reflect_output
      && self.xor_output == other.xor_output
  }
}

impl Eq for CrcParameters {}

impl Hash for CrcParameters {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.width.hash(state);
    self.polynomial.hash(state);
    self.initial_value.hash(state);
    self.reflect_input.hash(state);
    self.reflect_output.hash(state);
    self.xor_output.hash(state);
  }
}

impl AsRef<CrcParameters> for CrcParameters {
  #[inline]
  fn as_ref(&self) -> &CrcParameters {
    self
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for [`CrcParameters`]; validation happens in [`build`](Self::build).
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct CrcParametersBuilder {
  params: CrcParameters,
}

impl CrcParametersBuilder {
  pub const fn initial_value(mut self, value: u128) -> Self {
    self.params.initial_value = value;
    self
  }

  pub const fn reflect_input(mut self, reflect: bool) -> Self {
    self.params.reflect_input = reflect;
    self
  }

  pub const fn reflect_output(mut self, reflect: bool) -> Self {
    self.params.reflect_output = reflect;
    self
  }

  /// Set both reflection flags.
  pub const fn reflected(self, reflect: bool) -> Self {
    self.reflect_input(reflect).reflect_output(reflect)
  }

  pub const fn xor_output(mut self, value: u128) -> Self {
    self.params.xor_output = value;
    self
  }

  pub const fn check_result(mut self, value: u128) -> Self {
    self.params.check_result = Some(value);
    self
  }

  pub const fn residue(mut self, value: u128) -> Self {
    self.params.residue = Some(value);
    self
  }

  /// Validate and return the parameter set.
  ///
  /// # Errors
  ///
  /// See [`CrcParameters::validate`].
  pub const fn build(self) -> Result<CrcParameters, ParameterError> {
    match self.params.validate() {
      Ok(()) => Ok(self.params),
      Err(e) => Err(e),
    }
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::{collections::HashSet, vec::Vec};

  use super::*;

  #[test]
  fn builder_defaults() {
    let p = CrcParameters::new(21, 0xDEAD).unwrap();
    assert_eq!(p.width(), 21);
    assert_eq!(p.polynomial(), 0xDEAD);
    assert_eq!(p.initial_value(), 0);
    assert!(!p.reflect_input());
    assert!(!p.reflect_output());
    assert_eq!(p.xor_output(), 0);
    assert_eq!(p.check_result(), None);
    assert_eq!(p.residue(), None);
  }

  #[test]
  fn rejects_bad_widths() {
    assert_eq!(CrcParameters::new(0, 0), Err(ParameterError::ZeroWidth));
    assert_eq!(
      CrcParameters::new(129, 1),
      Err(ParameterError::WidthTooLarge { width: 129, max: 128 })
    );
    for w in 1..=128 {
      assert!(CrcParameters::new(w, 1).is_ok(), "width {w}");
    }
  }

  #[test]
  fn rejects_constants_wider_than_width() {
    assert_eq!(
      CrcParameters::new(8, 0x107),
      Err(ParameterError::PolynomialTooWide { width: 8, value: 0x107 })
    );
    assert_eq!(
      CrcParameters::builder(4, 0x3).initial_value(0x10).build(),
      Err(ParameterError::InitialValueTooWide { width: 4, value: 0x10 })
    );
    assert_eq!(
      CrcParameters::builder(3, 0x3).xor_output(0x8).build(),
      Err(ParameterError::XorOutputTooWide { width: 3, value: 0x8 })
    );
    assert!(CrcParameters::builder(128, u128::MAX).initial_value(u128::MAX).xor_output(u128::MAX).build().is_ok());
  }

  #[test]
  fn initial_value_override() {
    let base = CrcParameters::builder(32, 0x04C1_1DB7)
      .initial_value(0xFFFF_FFFF)
      .reflected(true)
      .xor_output(0xFFFF_FFFF)
      .check_result(0xCBF4_3926)
      .residue(0xDEBB_20E3)
      .build()
      .unwrap();
    let data: Vec<u8> = (0..255u8).collect();

    let seeded = base.with_initial_value(123).unwrap();
    assert_eq!(seeded.initial_value(), 123);
    assert_eq!(seeded.check_result(), None);
    assert_eq!(seeded.residue(), Some(0xDEBB_20E3));
    assert_ne!(seeded, base);
    assert_ne!(seeded.calc(&data), base.calc(&data));

    let rebuilt = CrcParameters::builder(32, 0x04C1_1DB7)
      .initial_value(123)
      .reflected(true)
      .xor_output(0xFFFF_FFFF)
      .build()
      .unwrap();
    assert_eq!(seeded, rebuilt);
    assert_eq!(seeded.calc(&data), rebuilt.calc(&data));

    assert_eq!(base.with_initial_value(0xFFFF_FFFF).unwrap().check_result(), Some(0xCBF4_3926));
    assert_eq!(
      base.with_initial_value(1 << 32),
      Err(ParameterError::InitialValueTooWide { width: 32, value: 1 << 32 })
    );
  }

  #[test]
  fn equality_ignores_metadata() {
    let a = CrcParameters::builder(32, 0x04C1_1DB7)
      .initial_value(0xFFFF_FFFF)
      .reflected(true)
      .xor_output(0xFFFF_FFFF)
      .build()
      .unwrap();
    let b = CrcParameters::builder(32, 0x04C1_1DB7)
      .initial_value(0xFFFF_FFFF)
      .reflected(true)
      .xor_output(0xFFFF_FFFF)
      .check_result(0xCBF4_3926)
      .residue(0xDEBB_20E3)
      .build()
      .unwrap();
    assert_eq!(a, b);

    let set: HashSet<CrcParameters> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);

    let c = CrcParameters::builder(32, 0x04C1_1DB7)
      .initial_value(0xFFFF_FFFF)
      .reflected(true)
      .build()
      .unwrap();
    assert_ne!(a, c);
  }

  #[test]
  fn twenty_one_bit_vector() {
    let p = CrcParameters::new(21, 0xDEAD).unwrap();
    assert_eq!(p.calc(b"Test"), 265_192);
    assert_eq!(p.calc_hex(b"Test"), "040be8");
    assert_eq!(p.calc_bytes(b"Test", ByteOrder::Big), [0x04, 0x0b, 0xe8]);
    assert_eq!(p.calc_bytes(b"Test", ByteOrder::Little), [0xe8, 0x0b, 0x04]);
  }

  #[test]
  fn selftest_defaults_and_overrides() {
    let p = CrcParameters::builder(32, 0x04C1_1DB7)
      .initial_value(0xFFFF_FFFF)
      .reflected(true)
      .check_result(0x340B_C6D9)
      .build()
      .unwrap();
    assert_eq!(p.selftest(None, None), Ok(0x340B_C6D9));
    assert!(p.selftest(None, Some(0x340B_C6D8)).is_err());
    assert!(p.selftest(Some(b"123456780"), None).is_err());

    let adhoc = CrcParameters::new(21, 0xDEAD).unwrap();
    assert_eq!(adhoc.selftest(Some(b"Test"), Some(265_192)), Ok(265_192));
    let err = adhoc.selftest(Some(b"Test"), None).unwrap_err();
    assert_eq!(err.expected(), None);
    assert_eq!(err.computed(), 265_192);
    assert_eq!(err.computed_hex(), "040be8");
  }

  #[test]
  fn derived_residue_known_values() {
    let hdlc = CrcParameters::builder(32, 0x04C1_1DB7)
      .initial_value(0xFFFF_FFFF)
      .reflected(true)
      .xor_output(0xFFFF_FFFF)
      .build()
      .unwrap();
    assert_eq!(hdlc.derived_residue(), 0xDEBB_20E3);

    let bzip2 = CrcParameters::builder(32, 0x04C1_1DB7)
      .initial_value(0xFFFF_FFFF)
      .xor_output(0xFFFF_FFFF)
      .build()
      .unwrap();
    assert_eq!(bzip2.derived_residue(), 0xC704_DD7B);

    let no_xor = CrcParameters::new(16, 0x1021).unwrap();
    assert_eq!(no_xor.derived_residue(), 0);
  }

  #[test]
  fn codeword_round_trip() {
    let p = CrcParameters::builder(16, 0x8005)
      .initial_value(0xFFFF)
      .reflected(true)
      .xor_output(0xFFFF)
      .build()
      .unwrap();
    let msg = b"hello codeword";
    let mut codeword: Vec<u8> = msg.to_vec();
    codeword.extend_from_slice(&p.calc_bytes(msg, p.codeword_order()));
    assert_eq!(&*p.codeword_tail(msg), &codeword[msg.len()..]);
    assert!(p.verify_codeword(&codeword));

    if let Some(last) = codeword.last_mut() {
      *last ^= 0x01;
    }
    assert!(!p.verify_codeword(&codeword));
  }

  fn mixed(reflect_input: bool, reflect_output: bool, xor_output: u128) -> CrcParameters {
    CrcParameters::builder(16, 0x1021)
      .initial_value(0x1D0F)
      .reflect_input(reflect_input)
      .reflect_output(reflect_output)
      .xor_output(xor_output)
      .build()
      .unwrap()
  }

  #[test]
  fn codeword_reflected_input_only() {
    for xor in [0, 0xFFFF, 0x1234] {
      let p = mixed(true, false, xor);
      assert_eq!(p.codeword_order(), ByteOrder::Little);
      let msg = b"123456789";
      let crc = p.calc(msg);
      assert_eq!(p.codeword_value(crc), reflect(crc, 16));

      let mut codeword = msg.to_vec();
      codeword.extend_from_slice(&p.codeword_tail(msg));
      assert!(p.verify_codeword(&codeword), "xor {xor:#x}");

      let mut plain = msg.to_vec();
      plain.extend_from_slice(&p.calc_bytes(msg, ByteOrder::Little));
      assert_eq!(p.verify_codeword(&plain), crc == reflect(crc, 16));
    }
  }

  #[test]
  fn codeword_reflected_output_only() {
    for xor in [0, 0xFFFF, 0x1234] {
      let p = mixed(false, true, xor);
      assert_eq!(p.codeword_order(), ByteOrder::Big);
      let msg = b"123456789";
      let crc = p.calc(msg);
      assert_eq!(p.codeword_value(crc), reflect(crc, 16));

      let mut codeword = msg.to_vec();
      codeword.extend_from_slice(&p.codeword_tail(msg));
      assert!(p.verify_codeword(&codeword), "xor {xor:#x}");

      let mut crc_engine = super::super::Crc::new(p);
      crc_engine.update(&codeword);
      assert_eq!(crc_engine.residue(), p.derived_residue());

      if let Some(first) = codeword.first_mut() {
        *first ^= 0x80;
      }
      assert!(!p.verify_codeword(&codeword));
    }
  }

  #[test]
  fn codeword_requires_whole_bytes() {
    let p = CrcParameters::new(21, 0xDEAD).unwrap();
    let mut codeword = b"Test".to_vec();
    codeword.extend_from_slice(&p.calc_bytes(b"Test", ByteOrder::Big));
    assert!(!p.verify_codeword(&codeword));
  }
}
