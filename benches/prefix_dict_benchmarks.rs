//! Prefix Dictionary Benchmarks
//!
//! Benchmarks for insertion, exact lookup and ranked prefix queries, using
//! the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prefix_dict_lib::data_structures::PrefixIndex;
use std::time::Duration;

/// Deterministic pseudo-words over a small alphabet so prefixes overlap.
fn synthetic_words(count: usize) -> Vec<(String, i64)> {
    let alphabet = ['a', 'e', 'i', 'n', 'r', 's', 't', 'o'];
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 3 + (state % 8) as usize;
            let word: String = (0..len)
                .map(|i| alphabet[((state >> (i * 3)) & 7) as usize])
                .collect();
            (word, 1 + (state % 100) as i64)
        })
        .collect()
}

fn bench_prefix_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_index");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 100_000].iter() {
        let words = synthetic_words(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter(|| {
                let mut index = PrefixIndex::new();
                for (word, frequency) in words {
                    index.insert(black_box(word), *frequency);
                }
                index
            });
        });

        let index: PrefixIndex = words.iter().cloned().collect();

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("contains", size), &index, |b, index| {
            b.iter(|| index.contains(black_box("straten")));
        });

        for prefix in ["", "s", "sta"] {
            group.bench_with_input(
                BenchmarkId::new(format!("predict_top10_{prefix:?}"), size),
                &index,
                |b, index| {
                    b.iter(|| index.predict(black_box(prefix), 10));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_prefix_index);
criterion_main!(benches);
