extern crate apsp;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use apsp::generator::{default_rng, RandomGraph};
use apsp::reference::bellman_ford_all_pairs;
use apsp::{compute_all_pairs, compute_all_pairs_sequential};

/// Johnson's algorithm on random graphs with negative edges, parallel and on one thread,
/// against Bellman-Ford from every vertex.
fn bench_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    for &nodes in [50u32, 200].iter() {
        let description = RandomGraph {
            nodes,
            edges: nodes * 4,
            weight_range: (0, 20),
            potential_spread: Some(30),
        };
        let graph = description.generate(&mut default_rng(10)).unwrap();
        group.throughput(Throughput::Elements(u64::from(nodes) * u64::from(nodes)));

        group.bench_with_input(BenchmarkId::new("johnson", nodes), &graph, |b, graph| {
            b.iter(|| black_box(compute_all_pairs(black_box(graph)).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("johnson_sequential", nodes), &graph, |b, graph| {
            b.iter(|| black_box(compute_all_pairs_sequential(black_box(graph)).unwrap()))
        });
        if nodes <= 50 {
            group.bench_with_input(BenchmarkId::new("bellman_ford", nodes), &graph, |b, graph| {
                b.iter(|| black_box(bellman_ford_all_pairs(black_box(graph)).unwrap()))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_all_pairs);
criterion_main!(benches);
