//! Loader-side edge-attribute helpers.
//!
//! Nothing in this module is part of the algorithmic core: it exists only
//! to get a caller's graph into the shape the cost/time convenience
//! solvers ([`MinCycleRatioSolver`](crate::parametric::MinCycleRatioSolver),
//! [`MaxCycleRatioSolver`](crate::parametric::MaxCycleRatioSolver)) expect.

use petgraph::graph::DiGraph;

/// The two numeric attributes the cost/time ratio problem reads off an
/// edge, by stable key name (`cost`, `time`), each optional so that
/// [`set_default`] has something to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostTime<R> {
    pub cost: Option<R>,
    pub time: Option<R>,
}

impl<R> CostTime<R> {
    /// Builds a fully-specified edge attribute pair.
    pub fn new(cost: R, time: R) -> Self {
        CostTime {
            cost: Some(cost),
            time: Some(time),
        }
    }
}

/// Which of an edge's two attributes [`set_default`] should fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeAttr {
    Cost,
    Time,
}

/// Fills in `attr` with `value` on every edge of `digraph` that doesn't
/// already have it set. Mutates the graph; the algorithmic core never
/// calls this itself.
pub fn set_default<V, R: Copy>(digraph: &mut DiGraph<V, CostTime<R>>, attr: EdgeAttr, value: R) {
    for weight in digraph.edge_weights_mut() {
        match attr {
            EdgeAttr::Cost => weight.cost.get_or_insert(value),
            EdgeAttr::Time => weight.time.get_or_insert(value),
        };
    }
}
