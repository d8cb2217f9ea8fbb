//! Parameterized CRC checksums with a named-variant catalogue.
//!
//! Every CRC in the Rocksoft model (width, polynomial, initial value, input
//! and output reflection, output XOR) is a value of [`CrcParameters`] run by one
//! generic engine, [`Crc`], for widths 1 through 128.
//!
//! # Modules
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`crc`] | [`CrcParameters`], the streaming [`Crc`] engine, kernel configuration |
//! | [`catalog`] | Every RevEng catalogue entry as a [`CrcVariant`] constant, plus legacy aliases |
//! | [`find`] | Filter parameter sets by any subset of fields |
//! | [`identify`] | Find the variants that produce an observed CRC value |
//! | [`sum`] | Additive and XOR word checksums |
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, catalog::CRC_32_ISO_HDLC};
//!
//! // One-shot computation
//! assert_eq!(CRC_32_ISO_HDLC.calc(b"123456789"), 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut crc = CRC_32_ISO_HDLC.engine();
//! crc.update(b"1234");
//! crc.update(b"56789");
//! assert_eq!(crc.finalize(), 0xCBF4_3926);
//! assert_eq!(crc.finalize_hex(), "cbf43926");
//!
//! // Bit reflection
//! assert_eq!(checksum::reflect(0b0011, 4), 0b1100);
//! ```
//!
//! # Kernel Selection
//!
//! Short inputs run the bitwise kernel, longer ones a 16-entry nibble table.
//! The choice can be forced per engine ([`Crc::with_force`]) or process-wide
//! with `CHECKSUM_CRC_FORCE` (`auto`, `bitwise`, `table`). The crossover length
//! is `CHECKSUM_CRC_THRESHOLD_BITWISE_TO_TABLE`. Both kernels always agree.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```
//!
//! Without `alloc`, [`find::find`] and [`identify::all`] are unavailable; the
//! lazy [`find::CrcFilter::iter`] and [`identify::first`] remain.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod common;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod catalog;
pub mod crc;
#[cfg(feature = "diag")]
pub mod diag;
pub mod find;
pub mod identify;
pub mod sum;

pub use catalog::{CATALOG, CrcVariant};
pub use common::{
  reference::CHECK_INPUT,
  reflect::{reflect, reflect_byte},
};
pub use crc::{Crc, CrcConfig, CrcForce, CrcParameters, CrcParametersBuilder, CrcTunables};
pub use sum::{Sum, SumKind, SumParameters, SumVariant};
// Re-export traits for convenience
pub use traits::{ByteOrder, CheckBytes, CheckHex, Checksum, ParameterError, SelfTestError};
