//! Benchmark suite for cycleratio-rs using criterion

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cycleratio_rs::loader::CostTime;
use cycleratio_rs::neg_cycle::NegCycleFinder;
use cycleratio_rs::parametric::{MaxParametricSolver, MinCycleRatioSolver, ParametricAPI};
use num::rational::Ratio;
use petgraph::graph::{DiGraph, EdgeReference};
use petgraph::visit::EdgeRef;

fn bench_neg_cycle_finder_howard(c: &mut Criterion) {
    let digraph = DiGraph::<(), Ratio<i32>>::from_edges(
        (0u32..100)
            .flat_map(|i| (0u32..100).map(move |j| (i, j, Ratio::new((i + j) as i32 % 10, 1))))
            .take(500),
    );

    let dist = vec![Ratio::new(0, 1); digraph.node_count()];

    c.bench_function("neg_cycle_finder_howard", |b| {
        b.iter(|| {
            let mut ncf = NegCycleFinder::new(black_box(&digraph));
            let mut dist = dist.clone();
            let mut cycles = ncf.howard(black_box(&mut dist), |e| *e.weight());
            cycles.next()
        })
    });
}

#[derive(Debug)]
struct MeanWeight;

impl<V> ParametricAPI<V, Ratio<i32>, Ratio<i32>> for MeanWeight {
    fn distance(&self, ratio: &Ratio<i32>, edge: &EdgeReference<Ratio<i32>>) -> Ratio<i32> {
        *ratio - *edge.weight()
    }

    fn zero_cancel(
        &self,
        cycle: &[EdgeReference<Ratio<i32>>],
    ) -> Result<Ratio<i32>, cycleratio_rs::error::ZeroCancelError> {
        let mut total_weight = Ratio::new(0, 1);
        for edge in cycle {
            total_weight += *edge.weight();
        }
        Ok(total_weight / Ratio::from_integer(cycle.len() as i32))
    }
}

fn bench_max_parametric_solver(c: &mut Criterion) {
    let digraph = DiGraph::<(), Ratio<i32>>::from_edges([
        (0, 1, Ratio::new(1, 1)),
        (1, 2, Ratio::new(1, 1)),
        (2, 0, Ratio::new(1, 1)),
        (2, 3, Ratio::new(2, 1)),
        (3, 4, Ratio::new(3, 1)),
        (4, 5, Ratio::new(1, 1)),
        (5, 6, Ratio::new(1, 1)),
        (6, 0, Ratio::new(2, 1)),
    ]);

    c.bench_function("max_parametric_solver", |b| {
        b.iter(|| {
            let mut solver = MaxParametricSolver::new(black_box(&digraph), MeanWeight);
            let mut dist = vec![Ratio::new(0, 1); 7];
            solver.run(black_box(&mut dist), Ratio::new(-1_000_000, 1))
        })
    });
}

fn bench_min_cycle_ratio_solver(c: &mut Criterion) {
    let mut digraph = DiGraph::<(), CostTime<Ratio<i64>>>::new();
    let nodes: Vec<_> = (0..20).map(|_| digraph.add_node(())).collect();
    for i in 0..20 {
        let next = (i + 1) % 20;
        digraph.add_edge(
            nodes[i],
            nodes[next],
            CostTime::new(
                Ratio::from_integer((i as i64 * 3) % 7 - 3),
                Ratio::from_integer(1),
            ),
        );
    }

    c.bench_function("min_cycle_ratio_solver", |b| {
        b.iter(|| {
            let mut solver = MinCycleRatioSolver::new(black_box(&digraph));
            let mut dist = vec![Ratio::from_integer(0); 20];
            solver.run(black_box(&mut dist), Ratio::from_integer(1000))
        })
    });
}

criterion_group!(
    benches,
    bench_neg_cycle_finder_howard,
    bench_max_parametric_solver,
    bench_min_cycle_ratio_solver
);
criterion_main!(benches);
