//! Bit-order reflection.
//!
//! Reflected ("LSB-first") CRC variants reverse each input byte before it is
//! folded into the register and reverse the register over `width` bits before
//! the output mask is applied.

/// Reverse the order of the low `bit_count` bits of `value`.
///
/// Bits above `bit_count` are ignored. For `bit_count > 128` the value is
/// reflected over that many bits and the low 128 bits of the result are kept,
/// so the function is total.
///
/// # Examples
///
/// ```
/// use checksum::reflect;
///
/// assert_eq!(reflect(0b0001, 4), 0b1000);
/// assert_eq!(reflect(0xF0, 4), 0x0);
/// assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
/// assert_eq!(reflect(0xFF, 0), 0);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u128, bit_count: u32) -> u128 {
  if bit_count == 0 {
    return 0;
  }
  let reversed = value.reverse_bits();
  if bit_count <= u128::BITS {
    reversed >> (u128::BITS - bit_count)
  } else {
    match reversed.checked_shl(bit_count - u128::BITS) {
      Some(v) => v,
      None => 0,
    }
  }
}

/// Reverse the bit order of one byte.
#[inline]
#[must_use]
pub const fn reflect_byte(byte: u8) -> u8 {
  byte.reverse_bits()
}
