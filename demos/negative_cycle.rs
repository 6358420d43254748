//! Negative cycle detection example

use cycleratio_rs::neg_cycle::NegCycleFinder;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

fn main() {
    println!("=== Example 1: Graph with negative cycle ===");
    let g_with_cycle = DiGraph::<(), f64>::from_edges([(0, 1, 1.0), (1, 2, 1.0), (2, 0, -3.0)]);
    let mut ncf = NegCycleFinder::new(&g_with_cycle);
    let mut dist = vec![0.0; g_with_cycle.node_count()];
    let mut cycles = ncf.howard(&mut dist, |e| *e.weight());
    match cycles.next() {
        Some(edges) => {
            let nodes: Vec<_> = edges.iter().map(|e| e.source()).collect();
            println!("Negative cycle found through nodes: {:?}", nodes);
            println!("The total weight of this cycle is negative,");
            println!("making shortest paths undefined.");
        }
        None => println!("No negative cycle found."),
    }

    println!("\n=== Example 2: Graph without negative cycle ===");
    let g_no_cycle = DiGraph::<(), f64>::from_edges([(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
    let mut ncf = NegCycleFinder::new(&g_no_cycle);
    let mut dist = vec![0.0; g_no_cycle.node_count()];
    let mut cycles = ncf.howard(&mut dist, |e| *e.weight());
    match cycles.next() {
        Some(edges) => println!("Negative cycle found: {} edges", edges.len()),
        None => println!("No negative cycle found. All edge weights sum to non-negative."),
    }

    println!("\n=== Example 3: Simple two-node negative cycle ===");
    let g_simple = DiGraph::<(), f64>::from_edges([(0, 1, 1.0), (1, 0, -2.0)]);
    let mut ncf = NegCycleFinder::new(&g_simple);
    let mut dist = vec![0.0; g_simple.node_count()];
    let mut cycles = ncf.howard(&mut dist, |e| *e.weight());
    match cycles.next() {
        Some(edges) => println!("Negative cycle found: {} edges", edges.len()),
        None => println!("No negative cycle found."),
    }
}
