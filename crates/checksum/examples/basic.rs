//! Basic checksum usage: catalogue variants, ad-hoc parameters, word sums.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{
  ByteOrder, Checksum, CrcParameters,
  catalog::{self, CRC_16_MODBUS, CRC_32_ISO_HDLC, CRC_64_XZ},
  sum::{CHECKSUM_16, SUM_CHECK_INPUT},
};

fn main() {
  println!("=== Checksum Basic Examples ===\n");

  one_shot_examples();
  streaming_examples();
  custom_parameters();
  word_sums();
}

/// One-shot computation over catalogue entries.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = checksum::CHECK_INPUT;
  for variant in [&CRC_16_MODBUS, &CRC_32_ISO_HDLC, &CRC_64_XZ] {
    println!("{:<18} 0x{}", variant.name(), variant.calc_hex(data));
  }

  let by_alias = catalog::lookup("Crc32");
  assert_eq!(by_alias, Some(&CRC_32_ISO_HDLC));
  println!();
}

/// Streaming: feed data in pieces, read the value at any point.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  let mut crc = CRC_32_ISO_HDLC.engine();
  crc.update(b"1234");
  println!("after \"1234\":      0x{}", crc.finalize_hex());
  crc.update(b"56789");
  println!("after \"56789\":     0x{}", crc.finalize_hex());
  assert_eq!(crc.finalize(), 0xCBF4_3926);

  let bytes = crc.finalize_bytes(ByteOrder::Little);
  println!("little-endian:     {:02x?}", bytes.as_bytes());

  let mut codeword = checksum::CHECK_INPUT.to_vec();
  codeword.extend_from_slice(&crc.codeword_tail());
  println!("codeword verifies: {}", CRC_32_ISO_HDLC.verify_codeword(&codeword));
  println!();
}

/// Any width from 1 to 128 bits.
fn custom_parameters() {
  println!("--- Custom Parameters ---\n");

  match CrcParameters::new(21, 0xDEAD) {
    Ok(params) => println!("width 21, poly 0xdead over \"Test\": {}", params.calc(b"Test")),
    Err(e) => println!("rejected: {e}"),
  }

  if let Err(e) = CrcParameters::new(8, 0x107) {
    println!("rejected: {e}");
  }
  println!();
}

/// Additive word checksum.
fn word_sums() {
  println!("--- Word Sums ---\n");

  let big = CHECKSUM_16.calc(SUM_CHECK_INPUT);
  let little = CHECKSUM_16.with_byte_order(ByteOrder::Little).calc(SUM_CHECK_INPUT);
  println!("{} big:    0x{big:04x}", CHECKSUM_16.ident());
  println!("{} little: 0x{little:04x}", CHECKSUM_16.ident());
}
