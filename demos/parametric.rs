//! Parametric algorithm example

use cycleratio_rs::loader::CostTime;
use cycleratio_rs::parametric::{MaxParametricSolver, MinCycleRatioSolver, ParametricAPI};
use num::rational::Ratio;
use petgraph::graph::{DiGraph, EdgeReference};

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

fn main() {
    println!("=== Example 1: custom mean-weight adapter ===");
    let digraph = DiGraph::<(), Ratio<i32>>::from_edges([
        (0, 1, Ratio::new(1, 1)),
        (1, 2, Ratio::new(1, 1)),
        (2, 0, Ratio::new(1, 1)),
    ]);

    let mut solver = MaxParametricSolver::new(&digraph, MeanWeight);
    let mut dist = [Ratio::new(0, 1), Ratio::new(0, 1), Ratio::new(0, 1)];
    let (ratio, cycle) = solver
        // r0 must be a feasible *lower* bound for the max variant.
        .run(&mut dist, Ratio::new(-1_000_000, 1))
        .expect("every cycle here has a nonzero length");

    println!("Maximum ratio found: {}", ratio);
    println!("Cycle length: {} edges", cycle.len());

    println!("\n=== Example 2: negative cycle ===");
    let digraph_neg = DiGraph::<(), Ratio<i32>>::from_edges([
        (0, 1, Ratio::new(1, 1)),
        (1, 2, Ratio::new(-5, 1)),
        (2, 0, Ratio::new(1, 1)),
    ]);

    let mut solver2 = MaxParametricSolver::new(&digraph_neg, MeanWeight);
    let mut dist2 = [Ratio::new(0, 1), Ratio::new(0, 1), Ratio::new(0, 1)];
    let (ratio2, cycle2) = solver2
        .run(&mut dist2, Ratio::new(-1_000_000, 1))
        .expect("every cycle here has a nonzero length");

    println!("Maximum ratio found: {}", ratio2);
    println!("Cycle length: {} edges", cycle2.len());

    println!("\n=== Example 3: minimum cost/time ratio ===");
    let mut digraph_ct = DiGraph::<(), CostTime<Ratio<i64>>>::new();
    let nodes: Vec<_> = (0..4).map(|_| digraph_ct.add_node(())).collect();
    for (u, v, cost, time) in [(0, 1, 2, 1), (1, 2, 3, 1), (2, 3, 1, 1), (3, 0, -7, 1)] {
        digraph_ct.add_edge(
            nodes[u],
            nodes[v],
            CostTime::new(Ratio::from_integer(cost), Ratio::from_integer(time)),
        );
    }

    let mut ratio_solver = MinCycleRatioSolver::new(&digraph_ct);
    let mut dist3 = vec![Ratio::from_integer(0); 4];
    let (r_star, cycle3) = ratio_solver
        .run(&mut dist3, Ratio::from_integer(0))
        .expect("this cycle's total time is nonzero");

    println!("Minimum cost/time ratio: {}", r_star);
    println!("Cycle length: {} edges", cycle3.len());
}
