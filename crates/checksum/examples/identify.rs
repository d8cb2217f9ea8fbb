//! Reverse-engineer an unknown CRC from a sample message.
//!
//! Run with: `cargo run --example identify -p checksum -- 0x4b37 123456789`

use checksum::{
  find::{CrcFilter, find_in_catalog},
  identify,
};

fn parse_value(s: &str) -> Option<u128> {
  match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
    Some(hex) => u128::from_str_radix(hex, 16).ok(),
    None => s.parse().ok(),
  }
}

fn main() {
  let mut args = std::env::args().skip(1);
  let value = args.next().as_deref().and_then(parse_value).unwrap_or(0x4B37);
  let message = args.next().unwrap_or_else(|| "123456789".to_owned());

  println!("=== Identify 0x{value:x} over {message:?} ===\n");

  let hits = identify::all(message.as_bytes(), value, None);
  if hits.is_empty() {
    println!("no catalogue variant produces this value");
  }
  for hit in &hits {
    let p = hit.params();
    println!(
      "{:<24} poly=0x{:x} init=0x{:x} refin={} refout={} xorout=0x{:x}",
      hit.name(),
      p.polynomial(),
      p.initial_value(),
      p.reflect_input(),
      p.reflect_output(),
      p.xor_output()
    );
  }

  println!("\n--- Same polynomial ---\n");
  for hit in &hits {
    let siblings = find_in_catalog(&CrcFilter::new().width(hit.width()).polynomial(hit.params().polynomial()));
    let names: Vec<&str> = siblings.iter().map(|v| v.name()).collect();
    println!("{}: {}", hit.name(), names.join(", "));
  }

  if let Some(first) = hits.first() {
    let engine = first.engine();
    println!("\nkernel for {} bytes: {}", message.len(), engine.kernel_name_for_len(message.len()));
  }
}
