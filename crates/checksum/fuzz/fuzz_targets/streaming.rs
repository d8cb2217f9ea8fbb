//! Fuzz target for the streaming API.
//!
//! Arbitrary parameter sets and chunkings must agree with one-shot results,
//! for both the CRC engine and the word checksums.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{ByteOrder, Checksum, Crc, CrcForce, CrcParameters, Sum, SumKind, SumParameters};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  poly: u128,
  init: u128,
  refin: bool,
  refout: bool,
  xorout: u128,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<u8>,
}

fn stream<C: Checksum>(fresh: &C, data: &[u8], chunk_sizes: &[u8]) -> C::Output {
  let mut hasher = fresh.clone();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = match chunk_sizes.get(chunk_idx % chunk_sizes.len().max(1)) {
      Some(&size) => usize::from(size).max(1),
      None => 1,
    };
    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  hasher.finalize()
}

fuzz_target!(|input: Input| {
  let width = u32::from(input.width % 128) + 1;
  let mask = u128::MAX >> (128 - width);

  let params = CrcParameters::builder(width, input.poly & mask)
    .initial_value(input.init & mask)
    .reflect_input(input.refin)
    .reflect_output(input.refout)
    .xor_output(input.xorout & mask)
    .build()
    .unwrap_or_else(|e| panic!("masked parameters rejected: {e}"));

  let expected = params.calc(&input.data);
  assert!(expected <= mask);
  for force in [CrcForce::Auto, CrcForce::Bitwise, CrcForce::Table] {
    let crc = Crc::with_force(params, force);
    assert_eq!(stream(&crc, &input.data, &input.chunk_sizes), expected, "width {width} {force:?}");
  }

  let sum_width = width.div_ceil(8) * 8;
  let order = if input.refin { ByteOrder::Little } else { ByteOrder::Big };
  let kind = if input.refout { SumKind::Xor } else { SumKind::Add };
  if let Ok(sum) = SumParameters::new(sum_width, kind) {
    let sum = sum.with_byte_order(order);
    let expected = sum.calc(&input.data);
    assert_eq!(stream(&Sum::new(sum), &input.data, &input.chunk_sizes), expected, "sum width {sum_width}");
  }
});
