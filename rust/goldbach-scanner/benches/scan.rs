use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use goldbach_core::PrimeSieve;
use goldbach_scanner::{goldbach_count, scan_with_sieve, wormhole_factor, ScanWindow};

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");

    for limit in [100_000u64, 1_000_000, 10_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(limit), &limit, |b, &limit| {
            b.iter(|| PrimeSieve::new(limit));
        });
    }

    group.finish();
}

fn bench_goldbach_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("goldbach_count");
    let sieve = PrimeSieve::new(1_000_000);

    for two_n in [10_000u64, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(two_n), &two_n, |b, &two_n| {
            b.iter(|| goldbach_count(two_n, &sieve));
        });
    }

    group.finish();
}

fn bench_wormhole(c: &mut Criterion) {
    let sieve = PrimeSieve::new(10_000);
    c.bench_function("wormhole_factor_10M", |b| {
        b.iter(|| wormhole_factor(10_000_010, &sieve));
    });
}

fn bench_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_window");
    group.sample_size(10);
    let sieve = PrimeSieve::new(102_000);
    group.bench_function("2N=1e5..+2000", |b| {
        b.iter(|| scan_with_sieve(ScanWindow::new(100_000, 2_000), &sieve));
    });
    group.finish();
}

criterion_group!(benches, bench_sieve, bench_goldbach_count, bench_wormhole, bench_window);
criterion_main!(benches);
