//! CRC runtime configuration (overrides + thresholds).
//!
//! This module centralizes kernel selection knobs for the generic engine:
//! - bitwise vs nibble-table length threshold
//! - optional forced kernel selection
//!
//! Both can be set through the environment (read once per process) or, for
//! the force mode, per engine with [`Crc::with_force`](super::Crc::with_force).

/// Forced kernel selection for the generic CRC engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CrcForce {
  /// Pick by input length.
  #[default]
  Auto,
  /// Always use the bit-at-a-time reference kernel.
  Bitwise,
  /// Always use the nibble-table kernel.
  Table,
}

impl CrcForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bitwise => "bitwise",
      Self::Table => "table",
    }
  }
}

/// CRC selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcTunables {
  /// Bytes where the nibble table becomes faster than bitwise division.
  pub bitwise_to_table: usize,
}

impl Default for CrcTunables {
  fn default() -> Self {
    Self {
      bitwise_to_table: DEFAULT_BITWISE_TO_TABLE,
    }
  }
}

const DEFAULT_BITWISE_TO_TABLE: usize = 8;

/// Full CRC runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CrcConfig {
  /// Requested force mode (env/programmatic).
  pub requested_force: CrcForce,
  /// Thresholds used by the selector.
  pub tunables: CrcTunables,
}

impl CrcConfig {
  /// Same configuration with a different force mode.
  #[inline]
  #[must_use]
  pub const fn with_force(self, force: CrcForce) -> Self {
    Self {
      requested_force: force,
      tunables: self.tunables,
    }
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: CrcForce,
  bitwise_to_table: Option<usize>,
}

#[cfg(feature = "std")]
fn parse_force(value: &str) -> Option<CrcForce> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  if value.eq_ignore_ascii_case("auto") {
    return Some(CrcForce::Auto);
  }
  if value.eq_ignore_ascii_case("bitwise") || value.eq_ignore_ascii_case("reference") {
    return Some(CrcForce::Bitwise);
  }
  if value.eq_ignore_ascii_case("table")
    || value.eq_ignore_ascii_case("nibble")
    || value.eq_ignore_ascii_case("portable")
  {
    return Some(CrcForce::Table);
  }

  None
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn parse_usize(name: &str) -> Option<usize> {
    let value = std::env::var(name).ok()?;
    let value = value.trim();
    if value.is_empty() {
      return None;
    }
    value.parse::<usize>().ok()
  }

  Overrides {
    force: std::env::var("CHECKSUM_CRC_FORCE")
      .ok()
      .and_then(|v| parse_force(&v))
      .unwrap_or(CrcForce::Auto),
    bitwise_to_table: parse_usize("CHECKSUM_CRC_THRESHOLD_BITWISE_TO_TABLE"),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Get the effective CRC configuration.
#[inline]
#[must_use]
pub fn get() -> CrcConfig {
  let ov = overrides();
  let mut tunables = CrcTunables::default();
  if let Some(v) = ov.bitwise_to_table {
    tunables.bitwise_to_table = v;
  }

  CrcConfig {
    requested_force: ov.force,
    tunables,
  }
}
