use criterion::{criterion_group, criterion_main, Criterion};
use fxhash::FxHashSet;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;
use trie_bench::*;

fn corpus(size: usize) -> Corpus {
    let config = CorpusConfig {
        size,
        ..Default::default()
    };
    Corpus::generate(&mut StdRng::seed_from_u64(size as u64), &config).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    for size in [1_000, 10_000] {
        let corpus = corpus(size);
        let mut group = c.benchmark_group(format!("populate {size}"));
        group.sample_size(10);

        group.bench_function("trie", |b| {
            b.iter_with_large_drop(|| corpus.build::<Trie>())
        });
        group.bench_function("hash_set", |b| {
            b.iter_with_large_drop(|| corpus.build::<HashSet<String>>())
        });
        group.bench_function("fx_hash_set", |b| {
            b.iter_with_large_drop(|| corpus.build::<FxHashSet<String>>())
        });
        group.bench_function("array", |b| {
            b.iter_with_large_drop(|| corpus.build::<Vec<String>>())
        });

        group.finish();
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
