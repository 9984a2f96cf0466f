//! Lexitrie Benchmarks
//!
//! Benchmarks for the trie, implemented with the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use lexitrie::Trie;
use std::time::Duration;

/// Deterministic pseudo-random words over `a..=z`.
fn generate_words(count: usize) -> Vec<String> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| (b'a' + ((state >> (i * 5)) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn build(words: &[String]) -> Trie {
    let mut trie = Trie::new();
    for word in words {
        let _ = trie.insert(word);
    }
    trie
}

fn bench_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1_000, 10_000].iter() {
        let words = generate_words(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter(|| build(black_box(words)));
        });

        let trie = build(&words);
        group.bench_with_input(BenchmarkId::new("search", size), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    let _ = black_box(trie.search(word));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("delete", size), &words, |b, words| {
            b.iter_batched(
                || build(words),
                |mut trie| {
                    for word in words {
                        let _ = trie.delete(word);
                    }
                    trie
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("autocomplete", size), &trie, |b, trie| {
            b.iter(|| trie.autocomplete(black_box("ab")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trie);
criterion_main!(benches);
