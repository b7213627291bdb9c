//! Micro-operation benchmarks for the recency list and both ARC replacement
//! rules.
//!
//! Run with: `cargo bench --bench ops`
//!
//! Measures per-operation latency for get, insert-with-eviction and a mixed
//! read-through loop under identical conditions.

mod common;

use std::hint::black_box;
use std::time::{Duration, Instant};

use arckit::builder::{ArcCacheBuilder, Replacement};
use arckit::policy::arc::ARCCore;
use arckit::policy::lru::LruCore;
use arckit::traits::CoreCache;
use common::workload::{KeyStream, Pattern};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

const CAPACITY: usize = 16_384;
const OPS: u64 = 100_000;

type Ctor = fn() -> Box<dyn CoreCache<u64, u64>>;

fn subjects() -> [(&'static str, Ctor); 3] {
    [
        ("lru", || Box::new(LruCore::<u64, u64>::new(CAPACITY))),
        ("arc_recency_first", || {
            Box::new(ARCCore::<u64, u64>::new(CAPACITY))
        }),
        ("arc_adaptive", || {
            Box::new(
                ArcCacheBuilder::new(CAPACITY)
                    .replacement(Replacement::Adaptive)
                    .build::<u64, u64>(),
            )
        }),
    ]
}

fn prefilled(ctor: Ctor) -> Box<dyn CoreCache<u64, u64>> {
    let mut cache = ctor();
    for i in 0..CAPACITY as u64 {
        cache.insert(i, i);
    }
    cache
}

// ============================================================================
// Get Hit Latency (ns/op)
// ============================================================================

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit_ns");
    group.throughput(Throughput::Elements(OPS));

    for (name, ctor) in subjects() {
        group.bench_function(name, |b| {
            b.iter_custom(|iters| {
                let mut cache = prefilled(ctor);
                let start = Instant::now();
                for _ in 0..iters {
                    for i in 0..OPS {
                        let key = i % (CAPACITY as u64);
                        black_box(cache.get(&key));
                    }
                }
                start.elapsed()
            })
        });
    }

    group.finish();
}

// ============================================================================
// Insert with Eviction (ns/op)
// ============================================================================

fn bench_insert_evict(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_evict_ns");
    group.throughput(Throughput::Elements(OPS));

    for (name, ctor) in subjects() {
        group.bench_function(name, |b| {
            b.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mut cache = prefilled(ctor);
                    let start = Instant::now();
                    for i in 0..OPS {
                        let key = CAPACITY as u64 + i;
                        cache.insert(key, key);
                    }
                    total += start.elapsed();
                }
                total
            })
        });
    }

    group.finish();
}

// ============================================================================
// Mixed Workload (get + insert on miss)
// ============================================================================

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_ops_ns");
    group.throughput(Throughput::Elements(OPS));

    let pattern = Pattern::Zipfian { theta: 0.99 };
    for (name, ctor) in subjects() {
        group.bench_function(name, |b| {
            b.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mut cache = prefilled(ctor);
                    let mut stream = KeyStream::new(4 * CAPACITY as u64, pattern, 7);
                    let keys: Vec<u64> = (0..OPS).map(|_| stream.next_key()).collect();
                    let start = Instant::now();
                    for &key in &keys {
                        if cache.get(&key).is_none() {
                            cache.insert(key, key);
                        }
                    }
                    total += start.elapsed();
                }
                total
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_insert_evict, bench_mixed);
criterion_main!(benches);
