use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use spanskip::SkipList;

fn make_sample_keys(
    n: usize,
    seed: u64,
) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(i64::MIN..=i64::MAX)).collect()
}

fn filled(keys: &[i64]) -> SkipList<i64> {
    let mut sl = SkipList::with_rng(StdRng::seed_from_u64(7));
    for k in keys {
        sl.put(*k);
    }
    sl
}

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_put");
    for &n in &[1_000usize, 10_000, 50_000] {
        let keys = make_sample_keys(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| black_box(filled(keys)))
        });
    }
    group.finish();
}

fn bench_get_hit_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_get");
    for &n in &[1_000usize, 10_000, 50_000] {
        let hits = make_sample_keys(n, 123);
        let misses = make_sample_keys(n, 9999);
        let sl = filled(&hits);

        group.bench_with_input(BenchmarkId::new("search_hit", n), &n, |b, _| {
            b.iter(|| {
                for k in hits.iter().take(1000) {
                    black_box(sl.search(k));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("search_miss", n), &n, |b, _| {
            b.iter(|| {
                for k in misses.iter().take(1000) {
                    black_box(sl.search(k));
                }
            })
        });
    }
    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_rank");
    for &n in &[1_000usize, 10_000, 50_000] {
        let keys = make_sample_keys(n, 5);
        let sl = filled(&keys);

        group.bench_with_input(BenchmarkId::new("rank", n), &n, |b, _| {
            b.iter(|| {
                for k in keys.iter().take(1000) {
                    black_box(sl.rank(k));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("get_by_rank", n), &n, |b, &n| {
            b.iter(|| {
                for r in (1..=n).step_by((n / 1000).max(1)) {
                    black_box(sl.get_by_rank(r).map(|node| *node.value()));
                }
            })
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_remove");
    for &n in &[1_000usize, 10_000] {
        let keys = make_sample_keys(n, 77);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter_batched(
                || filled(keys),
                |mut sl| {
                    for k in keys {
                        black_box(sl.remove(k));
                    }
                    sl
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_put,
    bench_get_hit_miss,
    bench_rank,
    bench_remove
);
criterion_main!(benches);
