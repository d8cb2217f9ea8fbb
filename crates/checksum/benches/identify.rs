//! Finder and identifier benchmarks.
//!
//! Run: `cargo bench -p checksum --bench identify`

use core::{hint::black_box, time::Duration};

use checksum::{
  catalog,
  find::{CrcFilter, find_in_catalog},
  identify,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

mod util;

fn bench_identify(c: &mut Criterion) {
  let mut group = c.benchmark_group("identify/catalog");
  for &(label, size) in &util::CASES[..3] {
    let data = util::make_data(size);
    let observed = catalog::CRC_32_ISO_HDLC.calc(&data);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("all", label), &data, |b, data| {
      b.iter(|| black_box(identify::all(black_box(data), observed, None)));
    });
    group.bench_with_input(BenchmarkId::new("all/width-32", label), &data, |b, data| {
      b.iter(|| black_box(identify::all(black_box(data), observed, Some(32))));
    });
  }
  group.finish();
}

fn bench_find(c: &mut Criterion) {
  let filter = CrcFilter::new().width(16).polynomial(0x1021).reflect_input(true);
  c.bench_function("find/catalog", |b| {
    b.iter(|| black_box(find_in_catalog(black_box(&filter))));
  });
}

criterion_group! {
  name = benches;
  config = Criterion::default()
    .measurement_time(Duration::from_secs(3))
    .sample_size(50);
  targets = bench_identify, bench_find
}
criterion_main!(benches);
