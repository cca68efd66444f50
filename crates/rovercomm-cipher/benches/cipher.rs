//! Benchmarks for grid construction and message transforms.
//!
//! # Benchmarks
//!
//! - **`engine_new`**: Builds a [`CipherEngine`] (key projection, grid fill,
//!   bijection check and position index) for several mission keys.
//! - **`encode`** / **`decode`**: Transforms normalized messages of increasing
//!   length with the reference key `MARS2025`.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench cipher
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rovercomm_cipher::CipherEngine;

const KEYS: [(&str, &str); 3] = [
    ("empty", ""),
    ("reference", "MARS2025"),
    ("long", "Olympus Mons rises 21.9 km above the Martian datum"),
];

const LENGTHS: [usize; 3] = [16, 256, 4096];

fn message(len: usize) -> String {
    rovercomm_core::ALPHABET
        .chars()
        .cycle()
        .step_by(7)
        .take(len)
        .collect()
}

fn bench_engine_new(c: &mut Criterion) {
    for (param, key) in KEYS {
        c.bench_with_input(BenchmarkId::new("engine_new", param), &key, |b, key| {
            b.iter(|| CipherEngine::new(hint::black_box(*key)).unwrap());
        });
    }
}

fn bench_encode(c: &mut Criterion) {
    let engine = CipherEngine::new("MARS2025").unwrap();
    let mut group = c.benchmark_group("encode");
    for len in LENGTHS {
        let plaintext = message(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &plaintext, |b, text| {
            b.iter_batched(
                || hint::black_box(text.as_str()),
                |text| engine.encode(text),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let engine = CipherEngine::new("MARS2025").unwrap();
    let mut group = c.benchmark_group("decode");
    for len in LENGTHS {
        let ciphertext = engine.encode(&message(len));
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &ciphertext, |b, text| {
            b.iter_batched(
                || hint::black_box(text.as_str()),
                |text| engine.decode(text),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine_new, bench_encode, bench_decode);
criterion_main!(benches);
