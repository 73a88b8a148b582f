use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tricount::matrix::generate;
use tricount_algorithms::{
    count_triangles, CscParallelCounter, CscSequentialCounter, NaiveCounter,
    NeighborExpansionCounter, Schedule,
};

/// Sequential counters across graph sizes
fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");

    for size in [200usize, 1_000, 4_000].iter() {
        let graph = generate::erdos_renyi(*size, 16.0 / *size as f64, 7)
            .to_csc()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("csc", size), &graph, |b, graph| {
            b.iter(|| count_triangles(&CscSequentialCounter::default(), graph).unwrap());
        });

        if *size <= 1_000 {
            group.bench_with_input(BenchmarkId::new("naive", size), &graph, |b, graph| {
                b.iter(|| count_triangles(&NaiveCounter::default(), graph).unwrap());
            });
        }
    }
    group.finish();
}

/// Parallel counters across thread counts on one graph
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    let graph = generate::erdos_renyi(10_000, 20.0 / 10_000.0, 11)
        .to_csc()
        .unwrap();

    for threads in [1usize, 2, 4, 8].iter() {
        group.bench_with_input(BenchmarkId::new("csc_static", threads), threads, |b, &t| {
            let counter = CscParallelCounter::new(t, Schedule::Static);
            b.iter(|| count_triangles(&counter, &graph).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("csc_dynamic", threads), threads, |b, &t| {
            let counter = CscParallelCounter::new(t, Schedule::Dynamic { batch: 1 });
            b.iter(|| count_triangles(&counter, &graph).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("neighbor_expansion", threads), threads, |b, &t| {
            let counter = NeighborExpansionCounter::new(t);
            b.iter(|| count_triangles(&counter, &graph).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sequential, bench_parallel);
criterion_main!(benches);
