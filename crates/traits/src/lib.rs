//! Core checksum traits shared by the checksum engines.
//!
//! This crate provides the streaming contract every engine conforms to, the
//! fixed-size output encodings and the error types. It is `no_std` compatible
//! and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | Update / finalize / reset lifecycle |
//! | [`CheckBytes`] | Finished value as big- or little-endian bytes |
//! | [`CheckHex`] | Finished value as fixed-width lowercase hex |
//!
//! # Error Types
//!
//! - [`ParameterError`] - Parameter set rejected at construction
//! - [`SelfTestError`] - Computed value did not match the expected check value
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
pub mod output;

pub use checksum::Checksum;
pub use error::{ParameterError, SelfTestError};
pub use output::{ByteOrder, CheckBytes, CheckHex, MAX_WIDTH};
