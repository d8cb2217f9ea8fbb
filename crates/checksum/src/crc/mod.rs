//! Generic CRC engine (Rocksoft model, widths 1 through 128).
//!
//! This module provides:
//! - [`CrcParameters`] - validated parameter set with one-shot helpers
//! - [`Crc`] - streaming engine over one parameter set
//! - [`config`] - kernel selection knobs
//!
//! # Quick Start
//!
//! ```rust
//! use checksum::{Checksum, Crc, CrcParameters};
//!
//! let crc32 = CrcParameters::builder(32, 0x04C1_1DB7)
//!   .initial_value(0xFFFF_FFFF)
//!   .reflected(true)
//!   .xor_output(0xFFFF_FFFF)
//!   .check_result(0xCBF4_3926)
//!   .build()?;
//!
//! assert_eq!(crc32.calc(b"123456789"), 0xCBF4_3926);
//!
//! let mut engine = Crc::new(crc32);
//! engine.update(b"1234");
//! engine.update(b"56789");
//! assert_eq!(engine.finalize_hex(), "cbf43926");
//! # Ok::<(), traits::ParameterError>(())
//! ```

pub mod config;
mod engine;
pub(crate) mod kernels;
mod params;

#[cfg(all(test, not(miri)))]
mod proptests;

pub use config::{CrcConfig, CrcForce, CrcTunables};
pub use engine::Crc;
pub use params::{CrcParameters, CrcParametersBuilder};
