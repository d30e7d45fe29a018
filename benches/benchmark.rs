//! Benchmarks for rotorcrypt cipher operations.
//!
//! Measures single-keystroke cost, message encryption throughput, and the
//! full brute-force key search in its sequential and parallel forms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rotorcrypt::{EnigmaMachine, KeyRecovery};

/// Offsets used consistently across all benchmarks.
const BENCH_OFFSETS: &str = "ABC";

/// Known plaintext/ciphertext pair for the built-in wiring.
const BENCH_PLAINTEXT: &str = "TURINGDIDIT";
const BENCH_CIPHERTEXT: &str = "PKCWHMWBHKX";

/// Benchmarks a single `press()` with no observers attached.
///
/// The machine is built once and its rotors advance naturally between
/// iterations, as they would while typing.
fn bench_press(c: &mut Criterion) {
    let mut machine = EnigmaMachine::new();
    c.bench_function("press_single_key", |b| {
        b.iter(|| machine.press(black_box('E')).unwrap());
    });
}

/// Benchmarks `encrypt()` throughput across message lengths.
fn bench_encrypt_lengths(c: &mut Criterion) {
    let lengths: &[usize] = &[16, 256, 4096];

    let mut group = c.benchmark_group("encrypt_message");
    for &len in lengths {
        let plaintext: String = "ATTACKATDAWN".chars().cycle().take(len).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &plaintext, |b, text| {
            b.iter(|| {
                EnigmaMachine::new()
                    .encrypt(BENCH_OFFSETS, black_box(text))
                    .unwrap()
            });
        });
    }
    group.finish();
}

/// Benchmarks the exhaustive 17,576-candidate key search.
///
/// Sequential and parallel searches are compared on the same known pair.
fn bench_key_search(c: &mut Criterion) {
    let search = KeyRecovery::default();

    let mut group = c.benchmark_group("key_search");
    group.sample_size(10);
    group.bench_function("sequential", |b| {
        b.iter(|| {
            search
                .find_initial_offsets(black_box(BENCH_PLAINTEXT), black_box(BENCH_CIPHERTEXT))
                .unwrap()
        });
    });
    group.bench_function("parallel", |b| {
        b.iter(|| {
            search
                .find_initial_offsets_parallel(
                    black_box(BENCH_PLAINTEXT),
                    black_box(BENCH_CIPHERTEXT),
                )
                .unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_press, bench_encrypt_lengths, bench_key_search);
criterion_main!(benches);
