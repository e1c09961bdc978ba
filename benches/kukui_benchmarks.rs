//! Kukui Library Benchmarks
//!
//! This module contains benchmarks for the Koa Trie and the Makai Cache.
//! The benchmarks are implemented using the Criterion framework, which
//! provides statistical analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use std::time::Duration;

/// Builds a vocabulary of `size` distinct short words over a small alphabet.
fn vocabulary(size: usize) -> Vec<String> {
    let alphabet = ['a', 'b', 'c', 'd', 'e', 'f'];
    let mut words = Vec::with_capacity(size);
    'outer: for a in alphabet {
        for b in alphabet {
            for c in alphabet {
                for d in alphabet {
                    if words.len() == size {
                        break 'outer;
                    }
                    words.push(format!("{a}{b}{c}{d}"));
                }
            }
        }
    }
    words
}

/// Benchmark the Koa Trie
fn bench_koa_trie(c: &mut Criterion) {
    use kukui_lib::data_structures::koa_trie::{KoaTrie, KoaTrieConfig};

    let mut group = c.benchmark_group("koa_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(60);

    // Insertion performance with different vocabulary sizes
    for size in [100, 1_000].iter() {
        let words = vocabulary(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("add", size), &words, |b, words| {
            b.iter(|| {
                let mut trie = KoaTrie::new();
                for word in words {
                    trie.add(black_box(word));
                }
            });
        });
    }

    // Membership lookups against a populated trie
    let words = vocabulary(1_000);
    let mut trie = KoaTrie::new();
    for word in &words {
        trie.add(word);
    }
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("search", |b| {
        b.iter(|| {
            for word in &words {
                black_box(trie.search(black_box(word)));
            }
        });
    });

    // Sequential vs. concurrent autocomplete over the same subtree
    for budget in [10, 100, 1_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("autocomplete", budget),
            budget,
            |b, &budget| {
                b.iter(|| black_box(trie.autocomplete(black_box("a"), budget)));
            },
        );
    }

    let concurrent_trie = {
        let mut t = KoaTrie::with_config(KoaTrieConfig::new().with_worker_count(4));
        for word in &words {
            t.add(word);
        }
        t
    };
    for budget in [10, 100, 1_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("autocomplete_concurrent", budget),
            budget,
            |b, &budget| {
                b.iter(|| black_box(concurrent_trie.autocomplete_concurrent(black_box("a"), budget)));
            },
        );
    }

    group.finish();
}

/// Benchmark the Makai Cache
fn bench_makai_cache(c: &mut Criterion) {
    use kukui_lib::data_structures::makai_cache::MakaiCache;

    let mut group = c.benchmark_group("makai_cache");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(100);

    // Set performance with eviction pressure (capacity half the key space)
    for size in [1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("set", size), size, |b, &size| {
            b.iter(|| {
                let mut cache = MakaiCache::new(size / 2);
                for i in 0..size {
                    cache.set(format!("key_{i}"), black_box(i));
                }
            });
        });
    }

    // Get performance against a warm cache
    let mut cache = MakaiCache::new(10_000);
    for i in 0..10_000usize {
        cache.set(format!("key_{i}"), i);
    }
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("get", |b| {
        b.iter(|| {
            for i in 0..10_000usize {
                black_box(cache.get(black_box(&format!("key_{i}"))));
            }
        });
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_koa_trie, bench_makai_cache
}
criterion_main!(benches);
