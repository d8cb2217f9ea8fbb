//! Common utilities for CRC computation.
//!
//! This module provides:
//! - Bit reflection
//! - The bitwise reference algorithm over an expanded register
//! - Const-fn nibble table generation

pub mod reference;
pub mod reflect;
pub mod tables;
