//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use cycleratio_rs::prelude::*;
//! use petgraph::graph::DiGraph;
//!
//! let g: DiGraph<(), i32> = DiGraph::new();
//! let _ncf = NegCycleFinder::new(&g);
//! ```

pub use crate::error::ZeroCancelError;
pub use crate::loader::{set_default, CostTime, EdgeAttr};
pub use crate::neg_cycle::NegCycleFinder;
pub use crate::parametric::{
    CostTimeApi, MaxCycleRatioSolver, MaxParametricSolver, MinCycleRatioSolver,
    MinParametricSolver, NegatedCostTimeApi, ParametricAPI,
};
