//! Differential fuzzing against the `crc` crate.

#![no_main]

use checksum::{Checksum, Crc, CrcForce, catalog};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  check(&catalog::CRC_16_IBM_SDLC, u128::from(crc::Crc::<u16>::new(&crc::CRC_16_IBM_SDLC).checksum(data)), data);
  check(&catalog::CRC_24_OPENPGP, u128::from(crc::Crc::<u32>::new(&crc::CRC_24_OPENPGP).checksum(data)), data);
  check(&catalog::CRC_32_ISCSI, u128::from(crc::Crc::<u32>::new(&crc::CRC_32_ISCSI).checksum(data)), data);
  check(&catalog::CRC_64_XZ, u128::from(crc::Crc::<u64>::new(&crc::CRC_64_XZ).checksum(data)), data);
  check(&catalog::CRC_82_DARC, crc::Crc::<u128>::new(&crc::CRC_82_DARC).checksum(data), data);
});

fn check(variant: &catalog::CrcVariant, reference: u128, data: &[u8]) {
  let ours = variant.calc(data);
  assert_eq!(
    ours,
    reference,
    "{} differential mismatch: ours={:#x}, reference={:#x}, len={}",
    variant.name(),
    ours,
    reference,
    data.len()
  );

  let mut bitwise = Crc::with_force(*variant.params(), CrcForce::Bitwise);
  let mut table = Crc::with_force(*variant.params(), CrcForce::Table);
  bitwise.update(data);
  table.update(data);
  assert_eq!(bitwise.finalize(), ours, "{} bitwise mismatch", variant.name());
  assert_eq!(table.finalize(), ours, "{} table mismatch", variant.name());
  assert_eq!(table.finalize_hex(), variant.calc_hex(data));
}
