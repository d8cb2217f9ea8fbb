//! Fixed-size encodings of a finished checksum value.
//!
//! Checksum widths range from 1 to 128 bits, so every encoding fits in a small
//! inline buffer and no allocation is needed:
//!
//! | Encoding | Capacity | Length |
//! |----------|----------|--------|
//! | [`CheckBytes`] | 16 bytes | `ceil(width / 8)` |
//! | [`CheckHex`] | 32 digits | `2 * ceil(width / 8)` |

use core::{fmt, ops::Deref};

/// Largest supported checksum width in bits.
pub const MAX_WIDTH: u32 = u128::BITS;

/// Number of whole bytes needed to hold `width` bits (clamped to 16).
#[inline]
#[must_use]
pub const fn byte_len(width: u32) -> usize {
  let bytes = width.div_ceil(8) as usize;
  if bytes > 16 { 16 } else { bytes }
}

/// Mask covering the low `width` bits.
#[inline]
#[must_use]
pub const fn low_bits(width: u32) -> u128 {
  if width >= MAX_WIDTH {
    u128::MAX
  } else {
    (1u128 << width) - 1
  }
}

/// Byte order used when a checksum value is serialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
  /// Most significant byte first.
  #[default]
  Big,
  /// Least significant byte first.
  Little,
}

impl ByteOrder {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Big => "big",
      Self::Little => "little",
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bytes
// ─────────────────────────────────────────────────────────────────────────────

/// A checksum value packed into the minimal number of bytes covering its width.
///
/// # Examples
///
/// ```
/// use traits::{ByteOrder, CheckBytes};
///
/// let be = CheckBytes::new(0x040be8, 21, ByteOrder::Big);
/// assert_eq!(&*be, &[0x04, 0x0b, 0xe8]);
///
/// let le = CheckBytes::new(0x040be8, 21, ByteOrder::Little);
/// assert_eq!(&*le, &[0xe8, 0x0b, 0x04]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckBytes {
  buf: [u8; 16],
  len: u8,
}

impl CheckBytes {
  /// Pack the low `width` bits of `value` in `order`.
  ///
  /// Bits above `width` are cleared, including the padding bits of a partial
  /// top byte.
  #[must_use]
  #[allow(clippy::indexing_slicing)]
  pub const fn new(value: u128, width: u32, order: ByteOrder) -> Self {
    let len = byte_len(width);
    let value = value & low_bits(width);
    let mut buf = [0u8; 16];
    let be = value.to_be_bytes();
    let le = value.to_le_bytes();
    let mut i = 0;
    while i < len {
      // i < len <= 16, and 16 - len + i < 16.
      buf[i] = match order {
        ByteOrder::Big => be[16 - len + i],
        ByteOrder::Little => le[i],
      };
      i += 1;
    }
    Self { buf, len: len as u8 }
  }

  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    self.buf.get(..self.len as usize).unwrap_or(&[])
  }

  /// Read the bytes back as an unsigned integer in `order`.
  #[must_use]
  pub fn to_value(&self, order: ByteOrder) -> u128 {
    let bytes = self.as_bytes();
    match order {
      ByteOrder::Big => bytes.iter().fold(0u128, |acc, &b| (acc << 8) | u128::from(b)),
      ByteOrder::Little => bytes.iter().rev().fold(0u128, |acc, &b| (acc << 8) | u128::from(b)),
    }
  }
}

impl Deref for CheckBytes {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl AsRef<[u8]> for CheckBytes {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl PartialEq<[u8]> for CheckBytes {
  fn eq(&self, other: &[u8]) -> bool {
    self.as_bytes() == other
  }
}

impl<const N: usize> PartialEq<[u8; N]> for CheckBytes {
  fn eq(&self, other: &[u8; N]) -> bool {
    self.as_bytes() == other.as_slice()
  }
}

impl fmt::Debug for CheckBytes {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("CheckBytes").field(&self.as_bytes()).finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hex
// ─────────────────────────────────────────────────────────────────────────────

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A checksum value as fixed-width lowercase hexadecimal.
///
/// The digit count is twice the byte length, so a 21-bit value always renders
/// as six digits.
///
/// # Examples
///
/// ```
/// use traits::CheckHex;
///
/// assert_eq!(CheckHex::new(0x040be8, 21).as_str(), "040be8");
/// assert_eq!(CheckHex::new(0x7, 3).as_str(), "07");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckHex {
  buf: [u8; 32],
  len: u8,
}

impl CheckHex {
  /// Render the low `width` bits of `value`; higher bits are dropped.
  #[must_use]
  #[allow(clippy::indexing_slicing)]
  pub const fn new(value: u128, width: u32) -> Self {
    let bytes = CheckBytes::new(value, width, ByteOrder::Big);
    let mut buf = [b'0'; 32];
    let mut i = 0;
    while i < bytes.len as usize {
      let b = bytes.buf[i];
      buf[2 * i] = HEX_DIGITS[(b >> 4) as usize];
      buf[2 * i + 1] = HEX_DIGITS[(b & 0x0f) as usize];
      i += 1;
    }
    Self {
      buf,
      len: bytes.len * 2,
    }
  }

  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    let digits = self.buf.get(..self.len as usize).unwrap_or(&[]);
    core::str::from_utf8(digits).unwrap_or_default()
  }
}

impl Deref for CheckHex {
  type Target = str;

  #[inline]
  fn deref(&self) -> &str {
    self.as_str()
  }
}

impl AsRef<str> for CheckHex {
  #[inline]
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl PartialEq<str> for CheckHex {
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}

impl PartialEq<&str> for CheckHex {
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

impl fmt::Display for CheckHex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Debug for CheckHex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "CheckHex({})", self.as_str())
  }
}
