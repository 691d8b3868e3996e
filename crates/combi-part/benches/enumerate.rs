use combi_part::{all_partitions, base_set, LiftEngine, LiftOpts, PartitionCache};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn enumerate_bench(c: &mut Criterion) {
    let seq = base_set(8, false);

    c.bench_function("type_a_all_partitions_8", |b| {
        b.iter(|| {
            let mut cache = PartitionCache::new();
            black_box(cache.all_partitions(black_box(&seq)));
        });
    });

    let type_a = all_partitions(&base_set(6, true));
    c.bench_function("type_b_lift_with_zero_6", |b| {
        b.iter(|| {
            let mut engine = LiftEngine::new();
            black_box(engine.lift_all(black_box(&type_a), &LiftOpts { expand: true }));
        });
    });
}

criterion_group!(benches, enumerate_bench);
criterion_main!(benches);
