//! Performance benchmarks for the query engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use enclosure_allocator::sample::sample_engine;
use enclosure_allocator::{Enclosure, EnclosureRegistry, QueryEngine, SpeciesCatalog};

fn large_engine(size: u32) -> QueryEngine {
    let catalog = SpeciesCatalog::new()
        .with_species("monkey", 1, ["savanna", "forest"])
        .and_then(|c| c.with_species("lion", 3, ["savanna"]))
        .expect("valid catalog");

    let enclosures = (1..=size)
        .rev()
        .map(|id| match id % 3 {
            0 => Enclosure::new(id, "savanna", 20).with_occupant("monkey", 1),
            1 => Enclosure::new(id, "forest", 10),
            _ => Enclosure::new(id, "savanna", 15).with_occupant("lion", 3),
        })
        .collect();

    QueryEngine::new(EnclosureRegistry::new(enclosures).expect("valid registry"), catalog)
}

fn benchmark_sample_evaluate(c: &mut Criterion) {
    let engine = sample_engine().expect("sample zoo");

    c.bench_function("evaluate_sample_monkey", |b| {
        b.iter(|| engine.evaluate(black_box("monkey"), black_box(2)))
    });

    c.bench_function("evaluate_sample_unknown", |b| {
        b.iter(|| engine.evaluate(black_box("unicorn"), black_box(1)))
    });
}

fn benchmark_registry_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_registry");

    for size in [10u32, 100, 1000].iter() {
        let engine = large_engine(*size);
        group.bench_with_input(BenchmarkId::new("enclosures", size), size, |b, _| {
            b.iter(|| engine.evaluate(black_box("monkey"), black_box(3)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sample_evaluate, benchmark_registry_size);
criterion_main!(benches);
