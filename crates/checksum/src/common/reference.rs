//! Bitwise reference implementation for every CRC width.
//!
//! This module is the "source of truth" for CRC computation. It processes one
//! bit at a time, making it:
//!
//! - **Obviously correct**: the loop mirrors polynomial long division
//! - **Width-agnostic**: one routine covers widths 1 through 128
//! - **Const-evaluable**: catalogue check values are verified at compile time
//!
//! The table kernel must produce registers identical to these functions.
//!
//! # Expanded Register
//!
//! The register is kept in the *top* `width` bits of a `u128`:
//!
//! ```text
//! bit 127                                      bit 0
//! ┌────────────── width ──────────────┬──── 0 ────┐
//! │        CRC register (MSB first)   │  unused   │
//! └───────────────────────────────────┴───────────┘
//! ```
//!
//! Input bytes are XORed into bits 120..128 and the polynomial is shifted up
//! by `128 - width`. The division step is then the same for every width, and
//! widths below 8 need no special casing: surplus input bits are shifted out
//! through the top of the register as the division proceeds.

// SAFETY: All array indexing uses bounded loop indices (0..data.len(), 0..VARIANTS.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::crc::CrcParameters;

/// Canonical self-test input (ASCII "123456789").
pub const CHECK_INPUT: &[u8] = b"123456789";

const TOP_BIT: u32 = u128::BITS - 1;
const BYTE_SHIFT: u32 = u128::BITS - 8;

// ─────────────────────────────────────────────────────────────────────────────
// Register Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Mask covering the low `width` bits.
#[inline]
#[must_use]
pub const fn width_mask(width: u32) -> u128 {
  if width >= u128::BITS {
    u128::MAX
  } else {
    (1u128 << width) - 1
  }
}

/// Move a `width`-bit value into the top of the register.
///
/// `width` must be in `1..=128`.
#[inline]
#[must_use]
pub const fn expand(value: u128, width: u32) -> u128 {
  value << (u128::BITS - width)
}

/// Inverse of [`expand`].
#[inline]
#[must_use]
pub const fn contract(register: u128, width: u32) -> u128 {
  register >> (u128::BITS - width)
}

/// Advance an expanded register by `bits` zero bits.
#[inline]
#[must_use]
pub const fn shift_zeros(mut register: u128, poly: u128, bits: u32) -> u128 {
  let mut i = 0;
  while i < bits {
    let mask = 0u128.wrapping_sub(register >> TOP_BIT);
    register = (register << 1) ^ (poly & mask);
    i += 1;
  }
  register
}

// ─────────────────────────────────────────────────────────────────────────────
// Reference CRC
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise CRC over an expanded register (MSB-first division).
///
/// # Arguments
///
/// * `register` - Current expanded register
/// * `poly` - Expanded polynomial (`poly << (128 - width)`)
/// * `reflect_input` - Bit-reverse each byte before folding
/// * `data` - Input bytes
///
/// # Returns
///
/// The expanded register after `data` (caller applies output reflection and XOR).
#[must_use]
pub const fn crc_bitwise(mut register: u128, poly: u128, reflect_input: bool, data: &[u8]) -> u128 {
  let mut i = 0;
  while i < data.len() {
    let byte = if reflect_input {
      data[i].reverse_bits()
    } else {
      data[i]
    };
    register ^= (byte as u128) << BYTE_SHIFT;
    register = shift_zeros(register, poly, 8);
    i += 1;
  }
  register
}

/// Finished CRC of `data` under `params`, computed bit by bit.
#[must_use]
pub const fn checksum(params: &CrcParameters, data: &[u8]) -> u128 {
  let width = params.width;
  let register = crc_bitwise(
    expand(params.initial_value, width),
    expand(params.polynomial, width),
    params.reflect_input,
    data,
  );
  finish(params, contract(register, width))
}

/// Apply output reflection and the XOR mask to a contracted register.
#[inline]
#[must_use]
pub const fn finish(params: &CrcParameters, register: u128) -> u128 {
  let out = if params.reflect_output {
    crate::common::reflect::reflect(register, params.width)
  } else {
    register
  };
  (out ^ params.xor_output) & width_mask(params.width)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Catalogue Verification
// ─────────────────────────────────────────────────────────────────────────────

const fn option_is(value: Option<u128>, expected: u128) -> bool {
  match value {
    Some(v) => v == expected,
    None => false,
  }
}

// Every catalogue entry must be a valid parameter set whose check value and
// residue agree with the reference algorithm.
const _: () = {
  let variants = crate::catalog::VARIANTS;
  let mut i = 0;
  while i < variants.len() {
    let params = variants[i].params();
    assert!(params.validate().is_ok());
    assert!(option_is(params.check_result, checksum(params, CHECK_INPUT)));
    assert!(option_is(params.residue, params.derived_residue()));
    i += 1;
  }
};

// Spot checks against published values.
const _: () = {
  let p = crate::catalog::CRC_32_ISO_HDLC.params();
  assert!(checksum(p, CHECK_INPUT) == 0xCBF4_3926);
  let p = crate::catalog::CRC_3_GSM.params();
  assert!(checksum(p, CHECK_INPUT) == 0x4);
  let p = crate::catalog::CRC_82_DARC.params();
  assert!(checksum(p, CHECK_INPUT) == 0x09_EA83_F625_0238_01FD_612);
};
