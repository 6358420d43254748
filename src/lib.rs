//! # cycleratio-rs
//!
//! Parametric optimization on weighted directed graphs: finding the
//! minimum (or maximum) cost-to-time ratio cycle via Howard's
//! policy-iteration method, layered on a Bellman-Ford-style negative-cycle
//! finder.
//!
//! ## Modules
//!
//! - [`neg_cycle`] — the negative-cycle finder (Howard's method).
//! - [`parametric`] — the parametric ratio solver and its cost/time
//!   convenience wrappers.
//! - [`loader`] — loader-side edge-attribute helpers, not part of the
//!   algorithmic core.
//! - [`error`] — the one domain error the core can propagate.
//!
//! ## Quick Start
//!
//! ```rust
//! use cycleratio_rs::loader::CostTime;
//! use cycleratio_rs::parametric::MinCycleRatioSolver;
//! use num::rational::Ratio;
//! use petgraph::graph::DiGraph;
//!
//! let mut g = DiGraph::<(), CostTime<Ratio<i64>>>::new();
//! let nodes: Vec<_> = (0..4).map(|_| g.add_node(())).collect();
//! g.add_edge(nodes[0], nodes[1], CostTime::new(Ratio::from_integer(2), Ratio::from_integer(1)));
//! g.add_edge(nodes[1], nodes[2], CostTime::new(Ratio::from_integer(3), Ratio::from_integer(1)));
//! g.add_edge(nodes[2], nodes[3], CostTime::new(Ratio::from_integer(1), Ratio::from_integer(1)));
//! g.add_edge(nodes[3], nodes[0], CostTime::new(Ratio::from_integer(-7), Ratio::from_integer(1)));
//!
//! let mut solver = MinCycleRatioSolver::new(&g);
//! let mut dist = vec![Ratio::from_integer(0); 4];
//! let (ratio, _cycle) = solver.run(&mut dist, Ratio::from_integer(0)).unwrap();
//! assert_eq!(ratio, Ratio::new(-1, 4));
//! ```

pub mod error;
pub mod loader;
pub mod neg_cycle;
pub mod parametric;

pub mod prelude;
