//! The generic CRC engine.

use core::fmt;

use traits::{ByteOrder, CheckBytes, CheckHex, Checksum, ParameterError};

use super::{
  CrcParameters,
  config::{self, CrcConfig, CrcForce},
  kernels::{self, Kernel},
};
use crate::common::{
  reference::{self, contract, expand},
  reflect::reflect,
  tables::{NIBBLE_ENTRIES, nibble_table},
};

/// Streaming CRC engine for any [`CrcParameters`].
///
/// One engine owns one register. Share parameters, not engines: clone a
/// fresh engine (or [`reset`](Crc::reset) it) for each computation.
///
/// # Examples
///
/// ```
/// use checksum::{Checksum, Crc, CrcParameters};
///
/// let params = CrcParameters::new(21, 0xDEAD)?;
/// let mut crc = Crc::new(params);
/// crc.update(b"Te");
/// crc.update(b"st");
/// assert_eq!(crc.finalize(), 265_192);
/// assert_eq!(crc.finalize_hex(), "040be8");
/// # Ok::<(), traits::ParameterError>(())
/// ```
#[derive(Clone)]
pub struct Crc {
  params: CrcParameters,
  /// Expanded register (CRC in the top `width` bits).
  state: u128,
  /// Expanded initial register.
  initial: u128,
  /// Expanded polynomial.
  poly: u128,
  table: [u128; NIBBLE_ENTRIES],
  config: CrcConfig,
}

impl Crc {
  /// Create an engine using the process-wide kernel configuration.
  #[must_use]
  pub fn new(params: CrcParameters) -> Self {
    Self::with_config(params, config::get())
  }

  /// Create an engine that always uses the kernel chosen by `force`.
  #[must_use]
  pub fn with_force(params: CrcParameters, force: CrcForce) -> Self {
    Self::with_config(params, config::get().with_force(force))
  }

  /// Create an engine whose register starts at `value` instead of the
  /// parameters' initial value.
  ///
  /// # Errors
  ///
  /// Returns [`ParameterError::InitialValueTooWide`] when `value` does not fit
  /// in the width.
  pub fn with_initial_value(params: CrcParameters, value: u128) -> Result<Self, ParameterError> {
    Ok(Self::new(params.with_initial_value(value)?))
  }

  fn with_config(params: CrcParameters, config: CrcConfig) -> Self {
    let width = params.width;
    let poly = expand(params.polynomial, width);
    let initial = expand(params.initial_value, width);
    Self {
      params,
      state: initial,
      initial,
      poly,
      table: nibble_table(poly),
      config,
    }
  }

  /// CRC of `data` under `params` in one shot.
  #[inline]
  #[must_use]
  pub fn calc(params: &CrcParameters, data: &[u8]) -> u128 {
    let mut crc = Self::new(*params);
    crc.update(data);
    crc.finalize()
  }

  #[inline]
  #[must_use]
  pub fn calc_bytes(params: &CrcParameters, data: &[u8], order: ByteOrder) -> CheckBytes {
    CheckBytes::new(Self::calc(params, data), params.width, order)
  }

  #[inline]
  #[must_use]
  pub fn calc_hex(params: &CrcParameters, data: &[u8]) -> CheckHex {
    CheckHex::new(Self::calc(params, data), params.width)
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParameters {
    &self.params
  }

  #[inline]
  #[must_use]
  pub const fn config(&self) -> CrcConfig {
    self.config
  }

  /// Fold `data` into the register.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    let refin = self.params.reflect_input;
    self.state = match kernels::select(self.config, data.len()).0 {
      Kernel::Bitwise => kernels::bitwise(self.state, self.poly, refin, data),
      Kernel::Nibble => kernels::nibble(self.state, &self.table, refin, data),
    };
  }

  /// Finished CRC: output reflection and XOR applied, masked to `width`.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u128 {
    reference::finish(&self.params, self.value())
  }

  /// Raw register value, before output reflection and XOR.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> u128 {
    contract(self.state, self.params.width)
  }

  #[inline]
  pub fn reset(&mut self) {
    self.state = self.initial;
  }

  /// Register in residue form (reflected when `reflect_output` is set).
  ///
  /// After a valid codeword this equals the variant's residue.
  #[inline]
  #[must_use]
  pub const fn residue(&self) -> u128 {
    let value = self.value();
    if self.params.reflect_output {
      reflect(value, self.params.width)
    } else {
      value
    }
  }

  /// Tail bytes that complete the data processed so far into a codeword.
  #[inline]
  #[must_use]
  pub fn codeword_tail(&self) -> CheckBytes {
    let params = &self.params;
    CheckBytes::new(params.codeword_value(self.finalize()), params.width, params.codeword_order())
  }

  /// Whether the data processed so far is a message followed by its tail.
  ///
  /// Always `false` for widths that are not a whole number of bytes.
  #[must_use]
  pub fn is_valid_codeword(&self) -> bool {
    if self.params.width % 8 != 0 {
      return false;
    }
    let expected = match self.params.residue {
      Some(r) => r,
      None => self.params.derived_residue(),
    };
    self.residue() == expected
  }

  /// Name of the kernel an `update` of `len` bytes would use.
  #[inline]
  #[must_use]
  pub const fn kernel_name_for_len(&self, len: usize) -> &'static str {
    kernels::select(self.config, len).0.name()
  }
}

impl Checksum for Crc {
  type Output = u128;

  #[inline]
  fn width(&self) -> u32 {
    self.params.width
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u128 {
    Crc::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc::reset(self);
  }
}

impl From<CrcParameters> for Crc {
  #[inline]
  fn from(params: CrcParameters) -> Self {
    Self::new(params)
  }
}

impl fmt::Debug for Crc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc")
      .field("width", &self.params.width)
      .field("register", &format_args!("0x{}", CheckHex::new(self.value(), self.params.width)))
      .field("force", &self.config.requested_force)
      .finish_non_exhaustive()
  }
}
