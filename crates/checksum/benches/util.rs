use std::sync::Once;

use checksum::{CrcForce, catalog};

pub const CASES: &[(&str, usize)] = &[
  ("xs", 16),
  ("s", 256),
  ("m", 4 * 1024),
  ("l", 64 * 1024),
  ("xl", 1024 * 1024),
];

#[must_use]
pub fn make_data(len: usize) -> Vec<u8> {
  (0..len)
    .map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8))
    .collect()
}

#[allow(dead_code)] // Used by `benches/crc.rs` (but not by `benches/identify.rs`).
/// Print kernel configuration once at benchmark start.
pub fn print_config_info() {
  static ONCE: Once = Once::new();
  ONCE.call_once(|| {
    let crc = catalog::CRC_32_ISO_HDLC.engine();
    let config = crc.config();
    eprintln!("╔══════════════════════════════════════════════════════════════╗");
    eprintln!("║                    KERNEL CONFIGURATION                      ║");
    eprintln!("╠══════════════════════════════════════════════════════════════╣");
    eprintln!("║ Force: {}", config.requested_force.as_str());
    eprintln!("║ Bitwise→table threshold: {} bytes", config.tunables.bitwise_to_table);
    eprintln!("╠══════════════════════════════════════════════════════════════╣");
    eprintln!("║ Kernel selection by size:");
    for &(label, size) in CASES {
      eprintln!("║   {:>3} ({:>7} B): {}", label, size, crc.kernel_name_for_len(size));
    }
    if config.requested_force != CrcForce::Auto {
      eprintln!("║ (forced via CHECKSUM_CRC_FORCE)");
    }
    eprintln!("╚══════════════════════════════════════════════════════════════╝");
  });
}
