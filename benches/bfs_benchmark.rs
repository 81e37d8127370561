use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parbfs::concurrency::exclusive_scan;
use parbfs::graph::generators;
use parbfs::{sequential_bfs, BfsConfig, CsrGraph, ParallelBfs};
use rand::{rngs::StdRng, SeedableRng};

fn bench_cube(c: &mut Criterion) {
    let mut group = c.benchmark_group("BFS Cube");
    group.sample_size(10);

    for size in [20usize, 40] {
        let graph = generators::cube_grid(size, size, size);
        let csr = CsrGraph::from(&graph);

        group.bench_with_input(BenchmarkId::new("sequential", size), &graph, |b, g| {
            b.iter(|| sequential_bfs(g, black_box(0)).unwrap())
        });

        for threads in [1, 4] {
            let engine = ParallelBfs::new(BfsConfig::default().with_threads(threads)).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("parallel/{threads}t"), size),
                &graph,
                |b, g| b.iter(|| engine.run(g, black_box(0)).unwrap()),
            );
        }

        let engine = ParallelBfs::new(BfsConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("parallel/csr", size), &csr, |b, g| {
            b.iter(|| engine.run(g, black_box(0)).unwrap())
        });
    }

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("BFS Random");
    let mut rng = StdRng::seed_from_u64(7);
    let n = 100_000;
    let graph = generators::random_undirected(n, n * 4, &mut rng);
    let engine = ParallelBfs::new(BfsConfig::default()).unwrap();

    group.bench_function("sequential", |b| {
        b.iter(|| sequential_bfs(&graph, black_box(0)).unwrap())
    });
    group.bench_function("parallel", |b| {
        b.iter(|| engine.run(&graph, black_box(0)).unwrap())
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("Exclusive Scan");
    let input: Vec<u64> = (0..1u64 << 20).map(|i| i % 7).collect();

    group.bench_function("sequential", |b| {
        b.iter_batched_ref(
            || input.clone(),
            |v| {
                let mut acc = 0;
                for x in v.iter_mut() {
                    let cur = *x;
                    *x = acc;
                    acc += cur;
                }
                acc
            },
            criterion::BatchSize::LargeInput,
        )
    });
    group.bench_function("parallel", |b| {
        b.iter_batched_ref(
            || input.clone(),
            |v| exclusive_scan(v.as_mut_slice()),
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_cube, bench_random, bench_scan);
criterion_main!(benches);
