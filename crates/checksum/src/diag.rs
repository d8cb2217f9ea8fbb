//! Optional diagnostics for kernel selection.
//!
//! This module is behind `cfg(feature = "diag")` and explains which kernel a
//! [`Crc`] engine would run for a given input length, without affecting
//! normal builds.

use crate::crc::{Crc, CrcForce, kernels};

/// High-level reason for a selection outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
  /// A forced mode was active (thresholds bypassed).
  Forced,
  /// Below the bitwise→table transition threshold.
  BelowTableThreshold,
  /// Normal auto selection.
  Auto,
}

impl From<kernels::Reason> for SelectionReason {
  fn from(reason: kernels::Reason) -> Self {
    match reason {
      kernels::Reason::Forced => Self::Forced,
      kernels::Reason::BelowTableThreshold => Self::BelowTableThreshold,
      kernels::Reason::Auto => Self::Auto,
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcSelectionDiag {
  pub width: u32,
  pub len: usize,
  pub requested_force: CrcForce,
  pub reason: SelectionReason,
  pub selected_kernel: &'static str,
  pub bitwise_to_table: usize,
}

/// Diagnose kernel selection for `crc` over an input of `len` bytes.
#[must_use]
pub fn crc_selection(crc: &Crc, len: usize) -> CrcSelectionDiag {
  let config = crc.config();
  let (kernel, reason) = kernels::select(config, len);
  CrcSelectionDiag {
    width: crc.params().width(),
    len,
    requested_force: config.requested_force,
    reason: reason.into(),
    selected_kernel: kernel.name(),
    bitwise_to_table: config.tunables.bitwise_to_table,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::CRC_32_ISO_HDLC;

  #[test]
  fn forced_selection_is_reported() {
    let crc = Crc::with_force(*CRC_32_ISO_HDLC.params(), CrcForce::Bitwise);
    let diag = crc_selection(&crc, 1 << 20);
    assert_eq!(diag.reason, SelectionReason::Forced);
    assert_eq!(diag.selected_kernel, kernels::BITWISE);
    assert_eq!(diag.width, 32);
  }

  #[test]
  fn diag_agrees_with_engine() {
    let crc = CRC_32_ISO_HDLC.engine();
    for len in [0usize, 1, 7, 8, 64, 4096] {
      let diag = crc_selection(&crc, len);
      assert_eq!(diag.selected_kernel, crc.kernel_name_for_len(len), "len {len}");
      assert_eq!(diag.len, len);
    }
  }
}
