//! Kernels for the generic CRC engine.
//!
//! Both kernels operate on the expanded register (CRC in the top `width` bits
//! of a `u128`) and must produce identical registers for every input.
//!
//! | Kernel | Work per byte | Use |
//! |--------|---------------|-----|
//! | [`BITWISE`] | 8 shift/XOR steps | Short inputs, verification |
//! | [`NIBBLE`] | 2 table lookups | Everything else |

// SAFETY: Table indices are `register >> 124`, which is always in 0..16.
#![allow(clippy::indexing_slicing)]

use super::config::{CrcConfig, CrcForce};
use crate::common::{reference, tables::NIBBLE_ENTRIES};

/// Bitwise reference kernel name.
pub const BITWISE: &str = "portable/bitwise";
/// Nibble-table kernel name.
pub const NIBBLE: &str = "portable/nibble";

/// A selected kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kernel {
  Bitwise,
  Nibble,
}

impl Kernel {
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Bitwise => BITWISE,
      Self::Nibble => NIBBLE,
    }
  }
}

/// Why [`select`] chose a kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
  /// A forced mode was active.
  Forced,
  /// Input shorter than the bitwise→table threshold.
  BelowTableThreshold,
  /// Normal auto selection.
  Auto,
}

/// Choose a kernel for an input of `len` bytes.
#[inline]
#[must_use]
pub const fn select(config: CrcConfig, len: usize) -> (Kernel, Reason) {
  match config.requested_force {
    CrcForce::Bitwise => (Kernel::Bitwise, Reason::Forced),
    CrcForce::Table => (Kernel::Nibble, Reason::Forced),
    CrcForce::Auto => {
      if len < config.tunables.bitwise_to_table {
        (Kernel::Bitwise, Reason::BelowTableThreshold)
      } else {
        (Kernel::Nibble, Reason::Auto)
      }
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernels
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
#[must_use]
pub fn bitwise(register: u128, poly: u128, reflect_input: bool, data: &[u8]) -> u128 {
  reference::crc_bitwise(register, poly, reflect_input, data)
}

#[inline]
#[must_use]
pub fn nibble(mut register: u128, table: &[u128; NIBBLE_ENTRIES], reflect_input: bool, data: &[u8]) -> u128 {
  for &byte in data {
    let byte = if reflect_input { byte.reverse_bits() } else { byte };
    register ^= u128::from(byte) << 120;
    register = (register << 4) ^ table[(register >> 124) as usize];
    register = (register << 4) ^ table[(register >> 124) as usize];
  }
  register
}
