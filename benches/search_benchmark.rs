use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use freetext::core::config::EngineConfig;
use freetext::core::engine::Engine;
use rand::Rng;

/// Helper to build a document from a small vocabulary
fn random_text(words: usize) -> String {
    let mut rng = rand::thread_rng();
    let pool = [
        "search", "engine", "index", "document", "ranking", "score",
        "crazy", "world", "motion", "cruel", "beautiful", "record",
        "posting", "term", "frequency", "storage", "codec", "pipeline",
    ];
    (0..words)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn indexed_engine(docs: usize) -> Engine {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    engine.open_index().unwrap();
    for id in 0..docs {
        engine.index_document(&format!("doc-{}", id), &random_text(40)).unwrap();
    }
    engine
}

/// Benchmark single document indexing
fn bench_index_document(c: &mut Criterion) {
    c.bench_function("index_document", |b| {
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        engine.open_index().unwrap();
        let mut id = 0u64;
        b.iter(|| {
            engine
                .index_document(&format!("doc-{}", id), &random_text(40))
                .unwrap();
            id += 1;
        });
    });
}

/// Benchmark search over growing corpora
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for corpus_size in [100, 1000, 5000].iter() {
        let engine = indexed_engine(*corpus_size);
        group.bench_with_input(
            BenchmarkId::from_parameter(corpus_size),
            corpus_size,
            |b, _| {
                b.iter(|| {
                    let hits = engine.search(black_box("crazy beautiful world"), 10).unwrap();
                    black_box(hits)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_index_document, bench_search);
criterion_main!(benches);
