//! Error types for checksum construction and self-verification.
//!
//! Both errors are plain values: they carry the data needed for a diagnostic
//! and never allocate. Not-found results from searches are not errors and are
//! reported as `Option`/empty collections by the callers.

use core::fmt;

use crate::output::{CheckHex, MAX_WIDTH, low_bits};

// ─────────────────────────────────────────────────────────────────────────────
// ParameterError
// ─────────────────────────────────────────────────────────────────────────────

/// A checksum parameter set was rejected at construction.
///
/// # Examples
///
/// ```
/// use traits::ParameterError;
///
/// let err = ParameterError::PolynomialTooWide { width: 8, value: 0x107 };
/// assert_eq!(err.to_string(), "polynomial 0x107 does not fit in 8 bits");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParameterError {
  /// Width was zero.
  ZeroWidth,
  /// Width exceeds the widest supported register.
  WidthTooLarge {
    width: u32,
    max: u32,
  },
  /// Word-oriented checksums need a width that is a whole number of bytes.
  WidthNotByteMultiple {
    width: u32,
  },
  /// The generator polynomial has bits at or above `width`.
  PolynomialTooWide {
    width: u32,
    value: u128,
  },
  /// The initial register value has bits at or above `width`.
  InitialValueTooWide {
    width: u32,
    value: u128,
  },
  /// The output XOR mask has bits at or above `width`.
  XorOutputTooWide {
    width: u32,
    value: u128,
  },
}

impl ParameterError {
  #[inline]
  #[must_use]
  pub const fn width_too_large(width: u32) -> Self {
    Self::WidthTooLarge { width, max: MAX_WIDTH }
  }

  /// The width the rejected parameter set declared.
  #[must_use]
  pub const fn width(&self) -> u32 {
    match *self {
      Self::ZeroWidth => 0,
      Self::WidthTooLarge { width, .. }
      | Self::WidthNotByteMultiple { width }
      | Self::PolynomialTooWide { width, .. }
      | Self::InitialValueTooWide { width, .. }
      | Self::XorOutputTooWide { width, .. } => width,
    }
  }
}

impl fmt::Display for ParameterError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::ZeroWidth => f.write_str("width must be a positive number of bits"),
      Self::WidthTooLarge { width, max } => write!(f, "width {width} exceeds the maximum of {max} bits"),
      Self::WidthNotByteMultiple { width } => write!(f, "width {width} is not a multiple of 8"),
      Self::PolynomialTooWide { width, value } => write!(f, "polynomial {value:#x} does not fit in {width} bits"),
      Self::InitialValueTooWide { width, value } => {
        write!(f, "initial value {value:#x} does not fit in {width} bits")
      }
      Self::XorOutputTooWide { width, value } => write!(f, "xor output {value:#x} does not fit in {width} bits"),
    }
  }
}

impl core::error::Error for ParameterError {}

// ─────────────────────────────────────────────────────────────────────────────
// SelfTestError
// ─────────────────────────────────────────────────────────────────────────────

/// A self-test computed a value different from the expected one, or had no
/// expected value to compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelfTestError {
  computed: u128,
  expected: Option<u128>,
  width: u32,
}

impl SelfTestError {
  #[inline]
  #[must_use]
  pub const fn new(computed: u128, expected: Option<u128>, width: u32) -> Self {
    Self {
      computed,
      expected,
      width,
    }
  }

  /// The value the checksum actually produced.
  #[inline]
  #[must_use]
  pub const fn computed(&self) -> u128 {
    self.computed
  }

  /// The value it was compared against, if one was configured.
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> Option<u128> {
    self.expected
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Computed value as fixed-width lowercase hex.
  #[inline]
  #[must_use]
  pub const fn computed_hex(&self) -> CheckHex {
    CheckHex::new(self.computed, self.width)
  }
}

impl fmt::Display for SelfTestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.expected {
      Some(expected) if expected & !low_bits(self.width) != 0 => write!(
        f,
        "self-test failed: computed 0x{}, expected {expected:#x} (wider than {} bits)",
        self.computed_hex(),
        self.width
      ),
      Some(expected) => write!(
        f,
        "self-test failed: computed 0x{}, expected 0x{}",
        self.computed_hex(),
        CheckHex::new(expected, self.width)
      ),
      None => write!(
        f,
        "self-test failed: computed 0x{}, no expected value configured",
        self.computed_hex()
      ),
    }
  }
}

impl core::error::Error for SelfTestError {}
