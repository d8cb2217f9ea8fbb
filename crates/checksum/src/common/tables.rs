//! Const-fn nibble table generation.
//!
//! A runtime-parameterized CRC cannot embed a 256-entry table per variant, so
//! the accelerated kernel uses a 16-entry table over the expanded register:
//!
//! | Table | Entries | Size | Lookups per byte |
//! |-------|---------|------|------------------|
//! | nibble | 16 × u128 | 256 B | 2 |
//!
//! Entry `i` is the register produced by dividing `i` placed in the top four
//! bits by the polynomial for four bit steps. Because the division is linear
//! over GF(2), `step4(r) = (r << 4) ^ T[r >> 124]`.

// SAFETY: All array indexing in this module uses bounded loop indices (0..16).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::reference::shift_zeros;

/// Number of entries in a nibble table.
pub const NIBBLE_ENTRIES: usize = 16;

/// Build the nibble table for an expanded polynomial.
#[must_use]
pub const fn nibble_table(poly: u128) -> [u128; NIBBLE_ENTRIES] {
  let mut table = [0u128; NIBBLE_ENTRIES];
  let mut i = 0;
  while i < NIBBLE_ENTRIES {
    table[i] = shift_zeros((i as u128) << 124, poly, 4);
    i += 1;
  }
  table
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::reference::expand;

  #[test]
  fn entry_zero_is_zero() {
    let t = nibble_table(expand(0x04C1_1DB7, 32));
    assert_eq!(t[0], 0);
  }

  #[test]
  fn entry_one_is_polynomial() {
    // 0b0001 reaches the top bit after three steps, and the fourth step XORs the polynomial.
    for (poly, width) in [(0x07u128, 8u32), (0x1021, 16), (0x3, 3), (0x42F0_E1EB_A9EA_3693, 64)] {
      let t = nibble_table(expand(poly, width));
      assert_eq!(t[1], expand(poly, width), "poly {poly:#x}");
    }
  }

  #[test]
  fn table_is_linear() {
    let t = nibble_table(expand(0x0308_c011_1011_4014_4041_1u128, 82));
    for a in 0..16usize {
      for b in 0..16usize {
        assert_eq!(t[a ^ b], t[a] ^ t[b]);
      }
    }
  }
}
