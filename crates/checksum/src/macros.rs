//! Internal macros for catalogue generation.
//!
//! These macros eliminate boilerplate when declaring many named parameter sets
//! that share identical structure but different constants.

/// Generate catalogue constants and the ordered catalogue slice.
///
/// This macro creates:
/// - One `pub const` [`CrcVariant`](crate::catalog::CrcVariant) per entry
/// - `VARIANTS`, a const slice in declaration order (used for compile-time checks)
///
/// # Arguments
///
/// - `$konst`: The Rust constant name (e.g., `CRC_32_ISO_HDLC`)
/// - `$ident`: The stable public identifier (e.g., `"Crc32IsoHdlc"`)
/// - `$name`: The catalogue name (e.g., `"CRC-32/ISO-HDLC"`)
macro_rules! define_crc_catalog {
  (
    $(
      ($konst:ident, $ident:literal, $name:literal) {
        width: $width:expr, poly: $poly:expr, init: $init:expr, refin: $refin:expr, refout: $refout:expr,
        xorout: $xorout:expr, check: $check:expr, residue: $residue:expr $(,)?
      }
    )+
  ) => {
    $(
      #[doc = concat!("`", $name, "` (`", $ident, "`).")]
      pub const $konst: CrcVariant = CrcVariant {
        name: $name,
        ident: $ident,
        params: $crate::crc::CrcParameters {
          width: $width,
          polynomial: $poly,
          initial_value: $init,
          reflect_input: $refin,
          reflect_output: $refout,
          xor_output: $xorout,
          check_result: Some($check),
          residue: Some($residue),
        },
      };
    )+

    /// Every catalogue entry, ordered by width and then name.
    pub(crate) const VARIANTS: &[CrcVariant] = &[$($konst),+];
  };
}
