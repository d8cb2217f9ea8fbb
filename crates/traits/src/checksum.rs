//! Streaming checksum trait.
//!
//! Every engine in this workspace follows the same lifecycle:
//!
//! - **Construct** from a validated parameter set
//! - **Update** any number of times with more input
//! - **Finalize** without consuming or mutating the state
//! - **Reset** back to the initial register value for reuse

use core::{fmt::Debug, ops::RangeBounds};

use crate::output::{ByteOrder, CheckBytes, CheckHex};

/// Number of bytes buffered on the stack when folding a byte iterator.
const ITER_CHUNK: usize = 64;

/// Runtime-parameterized checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc, catalog::CRC_32_ISO_HDLC};
///
/// let mut crc = Crc::new(*CRC_32_ISO_HDLC.params());
/// crc.update(b"1234");
/// crc.update_bytes("56789".bytes());
/// assert_eq!(crc.finalize(), 0xCBF4_3926);
/// assert_eq!(crc.finalize_hex(), "cbf43926");
/// ```
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the engine to its initial state
/// - Splitting input across `update` calls must not change the result
pub trait Checksum: Clone {
  /// The checksum output type.
  type Output: Copy + Eq + Debug + Into<u128>;

  /// Width of the finished value in bits.
  #[must_use]
  fn width(&self) -> u32;

  /// Fold more data into the running state.
  fn update(&mut self, data: &[u8]);

  /// Update with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update from any iterator of byte values.
  ///
  /// Bytes are staged through a small stack buffer so the engine still sees
  /// slices.
  fn update_bytes<I>(&mut self, bytes: I)
  where
    I: IntoIterator<Item = u8>,
  {
    let mut buf = [0u8; ITER_CHUNK];
    let mut n = 0usize;
    for b in bytes {
      if let Some(slot) = buf.get_mut(n) {
        *slot = b;
        n += 1;
      }
      if n == ITER_CHUNK {
        self.update(&buf);
        n = 0;
      }
    }
    if let Some(rest) = buf.get(..n) {
      self.update(rest);
    }
  }

  /// Update with the part of `data` selected by `range`.
  ///
  /// Bounds past the end of `data` are clamped, and an inverted range selects
  /// nothing, so `update_range(data, 2..)` behaves like slicing from index 2.
  fn update_range<R>(&mut self, data: &[u8], range: R)
  where
    R: RangeBounds<usize>,
  {
    use core::ops::Bound;

    let len = data.len();
    let start = match range.start_bound() {
      Bound::Included(&s) => s,
      Bound::Excluded(&s) => s.saturating_add(1),
      Bound::Unbounded => 0,
    }
    .min(len);
    let end = match range.end_bound() {
      Bound::Included(&e) => e.saturating_add(1),
      Bound::Excluded(&e) => e,
      Bound::Unbounded => len,
    }
    .min(len);

    if let Some(part) = data.get(start..end.max(start)) {
      self.update(part);
    }
  }

  /// Return the finished checksum.
  ///
  /// Does not mutate the state: more data may be folded in afterwards.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset to the initial register value.
  fn reset(&mut self);

  /// The finished checksum packed into `ceil(width / 8)` bytes.
  #[inline]
  #[must_use]
  fn finalize_bytes(&self, order: ByteOrder) -> CheckBytes {
    CheckBytes::new(self.finalize().into(), self.width(), order)
  }

  /// The finished checksum as fixed-width lowercase hex.
  #[inline]
  #[must_use]
  fn finalize_hex(&self) -> CheckHex {
    CheckHex::new(self.finalize().into(), self.width())
  }
}
