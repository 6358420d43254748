//! Parametric cycle-ratio optimization.
//!
//! Layers [`NegCycleFinder`] with a [`ParametricAPI`] adapter to find the
//! extremal (minimum or maximum) ratio achievable by some cycle of a
//! directed graph, and the cycle that achieves it. [`MinCycleRatioSolver`]
//! and [`MaxCycleRatioSolver`] are convenience wrappers around the
//! generic solvers for the common cost/time ratio formulation.

use std::marker::PhantomData;
use std::ops::Add;

use petgraph::graph::{DiGraph, EdgeReference};

use num::traits::Zero;

use crate::error::ZeroCancelError;
use crate::loader::CostTime;
use crate::neg_cycle::NegCycleFinder;

/// Maps `(ratio, edge) -> distance` and `cycle -> break-even ratio`.
///
/// `distance` must be total and pure over every edge at every ratio the
/// solver tries, and monotone in `ratio` in one consistent direction across
/// all edges (this is what makes the outer fixed-point iteration
/// converge). `zero_cancel` must be defined for every cycle the finder can
/// produce; it fails only when a cycle has no well-defined break-even
/// ratio (e.g. a zero denominator).
///
/// # Example
/// ```rust
/// use petgraph::graph::EdgeReference;
/// use petgraph::visit::EdgeRef;
/// use cycleratio_rs::error::ZeroCancelError;
/// use cycleratio_rs::parametric::ParametricAPI;
/// use num::rational::Ratio;
///
/// struct MeanWeight;
///
/// impl<V> ParametricAPI<V, Ratio<i32>, Ratio<i32>> for MeanWeight {
///     fn distance(&self, ratio: &Ratio<i32>, edge: &EdgeReference<Ratio<i32>>) -> Ratio<i32> {
///         *edge.weight() - *ratio
///     }
///
///     fn zero_cancel(&self, cycle: &[EdgeReference<Ratio<i32>>]) -> Result<Ratio<i32>, ZeroCancelError> {
///         let total: Ratio<i32> = cycle.iter().map(|e| *e.weight()).sum();
///         Ok(total / Ratio::from_integer(cycle.len() as i32))
///     }
/// }
/// ```
pub trait ParametricAPI<V, W, R>
where
    R: Copy + PartialOrd,
{
    fn distance(&self, ratio: &R, edge: &EdgeReference<W>) -> R;
    fn zero_cancel(&self, cycle: &[EdgeReference<W>]) -> Result<R, ZeroCancelError>;
}

/// Finds the *minimum* ratio achievable by some cycle (§4.3, min variant):
/// `r* = min { zero_cancel(C) : C a cycle of the graph }`.
#[derive(Debug)]
pub struct MinParametricSolver<'a, V, W, R, P>
where
    R: Copy + PartialOrd + Zero + Add<Output = R>,
    P: ParametricAPI<V, W, R>,
{
    ncf: NegCycleFinder<'a, V, W>,
    omega: P,
    max_outer_rounds: Option<usize>,
    _marker: PhantomData<R>,
}

impl<'a, V, W, R, P> MinParametricSolver<'a, V, W, R, P>
where
    R: Copy + PartialOrd + Zero + Add<Output = R>,
    P: ParametricAPI<V, W, R>,
{
    /// Binds a graph and the adapter driving the parametric weight.
    pub fn new(grph: &'a DiGraph<V, W>, omega: P) -> Self {
        Self {
            ncf: NegCycleFinder::new(grph),
            omega,
            max_outer_rounds: None,
            _marker: PhantomData,
        }
    }

    /// Bounds the number of outer ratio-improvement rounds (§7
    /// convergence-failure safety net for floating-point `R`). Exceeding it
    /// silently returns the best ratio found so far.
    pub fn with_max_outer_rounds(mut self, max_outer_rounds: usize) -> Self {
        self.max_outer_rounds = Some(max_outer_rounds);
        self
    }

    /// Finds the minimum ratio starting from the feasible upper bound `r0`,
    /// returning `(r*, C*)`. If `r0` exposes no cycle at all, returns
    /// `(r0, [])` unchanged.
    pub fn run(
        &mut self,
        dist: &mut [R],
        r0: R,
    ) -> Result<(R, Vec<EdgeReference<'a, W>>), ZeroCancelError> {
        let mut r_star = r0;
        let mut c_star = Vec::new();
        let mut rounds = 0usize;
        loop {
            if let Some(cap) = self.max_outer_rounds {
                if rounds >= cap {
                    #[cfg(feature = "std")]
                    log::warn!(
                        "MinParametricSolver: max_outer_rounds ({cap}) reached; returning best ratio found so far"
                    );
                    break;
                }
            }
            rounds += 1;

            for d in dist.iter_mut() {
                *d = R::zero();
            }

            let ratio_snapshot = r_star;
            let mut improved = false;
            for cycle in self
                .ncf
                .howard(dist, |e| self.omega.distance(&ratio_snapshot, &e))
            {
                let ri = self.omega.zero_cancel(&cycle)?;
                if ri < r_star {
                    r_star = ri;
                    c_star = cycle;
                    improved = true;
                }
            }

            if improved {
                #[cfg(feature = "std")]
                log::info!("MinParametricSolver: improved ratio at round {rounds}");
            } else {
                break;
            }
        }
        Ok((r_star, c_star))
    }
}

/// Finds the *maximum* ratio achievable by some cycle (§4.3, max variant —
/// mirror image of [`MinParametricSolver`]): `r* = max { zero_cancel(C) :
/// C a cycle of the graph }`.
#[derive(Debug)]
pub struct MaxParametricSolver<'a, V, W, R, P>
where
    R: Copy + PartialOrd + Zero + Add<Output = R>,
    P: ParametricAPI<V, W, R>,
{
    ncf: NegCycleFinder<'a, V, W>,
    omega: P,
    max_outer_rounds: Option<usize>,
    _marker: PhantomData<R>,
}

impl<'a, V, W, R, P> MaxParametricSolver<'a, V, W, R, P>
where
    R: Copy + PartialOrd + Zero + Add<Output = R>,
    P: ParametricAPI<V, W, R>,
{
    /// Binds a graph and the adapter driving the parametric weight.
    pub fn new(grph: &'a DiGraph<V, W>, omega: P) -> Self {
        Self {
            ncf: NegCycleFinder::new(grph),
            omega,
            max_outer_rounds: None,
            _marker: PhantomData,
        }
    }

    /// Bounds the number of outer ratio-improvement rounds, as
    /// [`MinParametricSolver::with_max_outer_rounds`].
    pub fn with_max_outer_rounds(mut self, max_outer_rounds: usize) -> Self {
        self.max_outer_rounds = Some(max_outer_rounds);
        self
    }

    /// Finds the maximum ratio starting from the feasible lower bound
    /// `r0`, returning `(r*, C*)`. If `r0` exposes no cycle at all, returns
    /// `(r0, [])` unchanged.
    pub fn run(
        &mut self,
        dist: &mut [R],
        r0: R,
    ) -> Result<(R, Vec<EdgeReference<'a, W>>), ZeroCancelError> {
        let mut r_star = r0;
        let mut c_star = Vec::new();
        let mut rounds = 0usize;
        loop {
            if let Some(cap) = self.max_outer_rounds {
                if rounds >= cap {
                    #[cfg(feature = "std")]
                    log::warn!(
                        "MaxParametricSolver: max_outer_rounds ({cap}) reached; returning best ratio found so far"
                    );
                    break;
                }
            }
            rounds += 1;

            for d in dist.iter_mut() {
                *d = R::zero();
            }

            let ratio_snapshot = r_star;
            let mut improved = false;
            for cycle in self
                .ncf
                .howard(dist, |e| self.omega.distance(&ratio_snapshot, &e))
            {
                let ri = self.omega.zero_cancel(&cycle)?;
                if ri > r_star {
                    r_star = ri;
                    c_star = cycle;
                    improved = true;
                }
            }

            if improved {
                #[cfg(feature = "std")]
                log::info!("MaxParametricSolver: improved ratio at round {rounds}");
            } else {
                break;
            }
        }
        Ok((r_star, c_star))
    }
}

/// The standard cost/time ratio adapter: `distance(r, e) = cost(e) - r *
/// time(e)`, `zero_cancel(cycle) = Σcost / Σtime`. `distance` is decreasing
/// in `r`, which is what [`MinParametricSolver`] needs to detect a cycle
/// whose ratio undercuts the current best — see [`NegatedCostTimeApi`] for
/// the mirror adapter [`MaxCycleRatioSolver`] drives.
#[derive(Debug, Default)]
pub struct CostTimeApi<R> {
    _marker: PhantomData<R>,
}

impl<R> CostTimeApi<R> {
    pub fn new() -> Self {
        CostTimeApi {
            _marker: PhantomData,
        }
    }
}

impl<V, R> ParametricAPI<V, CostTime<R>, R> for CostTimeApi<R>
where
    R: Copy + PartialOrd + Zero + std::ops::Sub<Output = R> + std::ops::Mul<Output = R> + std::ops::Div<Output = R>,
{
    fn distance(&self, ratio: &R, edge: &EdgeReference<CostTime<R>>) -> R {
        let w = edge.weight();
        let cost = w.cost.expect("CostTimeApi: edge missing `cost`; call set_default first");
        let time = w.time.expect("CostTimeApi: edge missing `time`; call set_default first");
        cost - *ratio * time
    }

    fn zero_cancel(&self, cycle: &[EdgeReference<CostTime<R>>]) -> Result<R, ZeroCancelError> {
        let mut total_cost = R::zero();
        let mut total_time = R::zero();
        for edge in cycle {
            let w = edge.weight();
            total_cost = total_cost
                + w.cost.expect("CostTimeApi: edge missing `cost`; call set_default first");
            total_time = total_time
                + w.time.expect("CostTimeApi: edge missing `time`; call set_default first");
        }
        if total_time == R::zero() {
            return Err(ZeroCancelError::ZeroDenominator);
        }
        Ok(total_cost / total_time)
    }
}

/// The negated cost/time ratio adapter: `distance(r, e) = r * time(e) -
/// cost(e)`, increasing in `r`. [`MaxParametricSolver`] needs an adapter
/// whose distance is increasing in `r` to detect a cycle whose ratio
/// exceeds the current best; negating [`CostTimeApi`]'s distance (its
/// `zero_cancel` is unaffected, since the break-even ratio itself doesn't
/// change sign) gives exactly that.
#[derive(Debug, Default)]
pub struct NegatedCostTimeApi<R> {
    _marker: PhantomData<R>,
}

impl<R> NegatedCostTimeApi<R> {
    pub fn new() -> Self {
        NegatedCostTimeApi {
            _marker: PhantomData,
        }
    }
}

impl<V, R> ParametricAPI<V, CostTime<R>, R> for NegatedCostTimeApi<R>
where
    R: Copy + PartialOrd + Zero + std::ops::Sub<Output = R> + std::ops::Mul<Output = R> + std::ops::Div<Output = R>,
{
    fn distance(&self, ratio: &R, edge: &EdgeReference<CostTime<R>>) -> R {
        let w = edge.weight();
        let cost = w.cost.expect("NegatedCostTimeApi: edge missing `cost`; call set_default first");
        let time = w.time.expect("NegatedCostTimeApi: edge missing `time`; call set_default first");
        *ratio * time - cost
    }

    fn zero_cancel(&self, cycle: &[EdgeReference<CostTime<R>>]) -> Result<R, ZeroCancelError> {
        let mut total_cost = R::zero();
        let mut total_time = R::zero();
        for edge in cycle {
            let w = edge.weight();
            total_cost = total_cost
                + w.cost.expect("NegatedCostTimeApi: edge missing `cost`; call set_default first");
            total_time = total_time
                + w.time.expect("NegatedCostTimeApi: edge missing `time`; call set_default first");
        }
        if total_time == R::zero() {
            return Err(ZeroCancelError::ZeroDenominator);
        }
        Ok(total_cost / total_time)
    }
}

/// Convenience wrapper: `r* = min { Σcost(C) / Σtime(C) : C a cycle }`.
#[derive(Debug)]
pub struct MinCycleRatioSolver<'a, V, R> {
    inner: MinParametricSolver<'a, V, CostTime<R>, R, CostTimeApi<R>>,
}

impl<'a, V, R> MinCycleRatioSolver<'a, V, R>
where
    R: Copy
        + PartialOrd
        + Zero
        + std::ops::Add<Output = R>
        + std::ops::Sub<Output = R>
        + std::ops::Mul<Output = R>
        + std::ops::Div<Output = R>,
{
    pub fn new(grph: &'a DiGraph<V, CostTime<R>>) -> Self {
        MinCycleRatioSolver {
            inner: MinParametricSolver::new(grph, CostTimeApi::new()),
        }
    }

    pub fn with_max_outer_rounds(mut self, max_outer_rounds: usize) -> Self {
        self.inner = self.inner.with_max_outer_rounds(max_outer_rounds);
        self
    }

    pub fn run(
        &mut self,
        dist: &mut [R],
        r0: R,
    ) -> Result<(R, Vec<EdgeReference<'a, CostTime<R>>>), ZeroCancelError> {
        self.inner.run(dist, r0)
    }
}

/// Convenience wrapper: `r* = max { Σcost(C) / Σtime(C) : C a cycle }`.
#[derive(Debug)]
pub struct MaxCycleRatioSolver<'a, V, R> {
    inner: MaxParametricSolver<'a, V, CostTime<R>, R, NegatedCostTimeApi<R>>,
}

impl<'a, V, R> MaxCycleRatioSolver<'a, V, R>
where
    R: Copy
        + PartialOrd
        + Zero
        + std::ops::Add<Output = R>
        + std::ops::Sub<Output = R>
        + std::ops::Mul<Output = R>
        + std::ops::Div<Output = R>,
{
    pub fn new(grph: &'a DiGraph<V, CostTime<R>>) -> Self {
        MaxCycleRatioSolver {
            inner: MaxParametricSolver::new(grph, NegatedCostTimeApi::new()),
        }
    }

    pub fn with_max_outer_rounds(mut self, max_outer_rounds: usize) -> Self {
        self.inner = self.inner.with_max_outer_rounds(max_outer_rounds);
        self
    }

    pub fn run(
        &mut self,
        dist: &mut [R],
        r0: R,
    ) -> Result<(R, Vec<EdgeReference<'a, CostTime<R>>>), ZeroCancelError> {
        self.inner.run(dist, r0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::rational::Ratio;

    /// Increasing in `ratio`, for driving `MaxParametricSolver` from a
    /// feasible lower bound.
    #[derive(Debug, Default)]
    struct MeanWeight;

    impl<V> ParametricAPI<V, Ratio<i32>, Ratio<i32>> for MeanWeight {
        fn distance(&self, ratio: &Ratio<i32>, edge: &EdgeReference<Ratio<i32>>) -> Ratio<i32> {
            *ratio - *edge.weight()
        }

        fn zero_cancel(
            &self,
            cycle: &[EdgeReference<Ratio<i32>>],
        ) -> Result<Ratio<i32>, ZeroCancelError> {
            let mut total_weight = Ratio::new(0, 1);
            for edge in cycle {
                total_weight += *edge.weight();
            }
            Ok(total_weight / Ratio::from_integer(cycle.len() as i32))
        }
    }

    #[test]
    fn test_max_parametric_solver_simple() {
        let digraph = DiGraph::<(), Ratio<i32>>::from_edges([
            (0, 1, Ratio::new(1, 1)),
            (1, 2, Ratio::new(1, 1)),
            (2, 0, Ratio::new(1, 1)),
        ]);

        let mut solver = MaxParametricSolver::new(&digraph, MeanWeight);
        let mut dist = [Ratio::new(0, 1), Ratio::new(0, 1), Ratio::new(0, 1)];
        let (ratio, _cycle) = solver.run(&mut dist, Ratio::new(-1_000_000, 1)).unwrap();

        assert_eq!(ratio, Ratio::new(1, 1));
    }

    #[test]
    fn test_max_parametric_solver_negative_cycle() {
        let digraph = DiGraph::<(), Ratio<i32>>::from_edges([
            (0, 1, Ratio::new(1, 1)),
            (1, 2, Ratio::new(-5, 1)),
            (2, 0, Ratio::new(1, 1)),
        ]);

        let mut solver = MaxParametricSolver::new(&digraph, MeanWeight);
        let mut dist = [Ratio::new(0, 1), Ratio::new(0, 1), Ratio::new(0, 1)];
        let (ratio, _cycle) = solver.run(&mut dist, Ratio::new(-1_000_000, 1)).unwrap();

        assert_eq!(ratio, Ratio::new(-1, 1));
    }

    #[test]
    fn test_max_parametric_solver_no_cycle() {
        let digraph = DiGraph::<(), Ratio<i32>>::from_edges([(0, 1, Ratio::new(1, 1))]);

        let mut solver = MaxParametricSolver::new(&digraph, MeanWeight);
        let mut dist = [Ratio::new(0, 1), Ratio::new(0, 1)];
        let (ratio, cycle) = solver.run(&mut dist, Ratio::new(-1_000_000, 1)).unwrap();

        assert_eq!(ratio, Ratio::new(-1_000_000, 1));
        assert!(cycle.is_empty());
    }

    #[test]
    fn test_min_cycle_ratio_solver_four_cycle() {
        // S3 from spec.md: r* = -1/4, total cost -1, total time 4.
        let mut digraph = DiGraph::<(), CostTime<Ratio<i64>>>::new();
        let nodes: Vec<_> = (0..4).map(|_| digraph.add_node(())).collect();
        let edges = [
            (0, 1, 2, 1),
            (1, 2, 3, 1),
            (2, 3, 1, 1),
            (3, 0, -7, 1),
        ];
        for (u, v, cost, time) in edges {
            digraph.add_edge(
                nodes[u],
                nodes[v],
                CostTime::new(Ratio::from_integer(cost), Ratio::from_integer(time)),
            );
        }

        let mut solver = MinCycleRatioSolver::new(&digraph);
        let mut dist = vec![Ratio::from_integer(0); 4];
        let (ratio, cycle) = solver.run(&mut dist, Ratio::from_integer(0)).unwrap();

        assert_eq!(ratio, Ratio::new(-1, 4));
        let total_cost: Ratio<i64> = cycle.iter().map(|e| e.weight().cost.unwrap()).sum();
        let total_time: Ratio<i64> = cycle.iter().map(|e| e.weight().time.unwrap()).sum();
        assert_eq!(total_cost, Ratio::from_integer(-1));
        assert_eq!(total_time, Ratio::from_integer(4));
    }

    #[test]
    fn test_min_cycle_ratio_solver_multiple_candidates() {
        // S4 from spec.md: r* = 2 via the A<->B cycle (cost 4, time 2).
        let mut digraph = DiGraph::<(), CostTime<Ratio<i64>>>::new();
        let a = digraph.add_node(());
        let b = digraph.add_node(());
        let c = digraph.add_node(());
        digraph.add_edge(a, b, CostTime::new(Ratio::from_integer(5), Ratio::from_integer(1)));
        digraph.add_edge(b, a, CostTime::new(Ratio::from_integer(-1), Ratio::from_integer(1)));
        digraph.add_edge(a, c, CostTime::new(Ratio::from_integer(10), Ratio::from_integer(1)));
        digraph.add_edge(c, a, CostTime::new(Ratio::from_integer(-2), Ratio::from_integer(1)));

        let mut solver = MinCycleRatioSolver::new(&digraph);
        let mut dist = vec![Ratio::from_integer(0); 3];
        let (ratio, _cycle) = solver.run(&mut dist, Ratio::from_integer(10)).unwrap();

        assert_eq!(ratio, Ratio::from_integer(2));
    }

    #[test]
    fn test_min_cycle_ratio_solver_zero_time_is_domain_error() {
        // S5 from spec.md: a cycle whose total time is zero surfaces the
        // adapter's domain error.
        let mut digraph = DiGraph::<(), CostTime<Ratio<i64>>>::new();
        let a = digraph.add_node(());
        let b = digraph.add_node(());
        digraph.add_edge(a, b, CostTime::new(Ratio::from_integer(1), Ratio::from_integer(1)));
        digraph.add_edge(b, a, CostTime::new(Ratio::from_integer(-5), Ratio::from_integer(-1)));

        let mut solver = MinCycleRatioSolver::new(&digraph);
        let mut dist = vec![Ratio::from_integer(0); 2];
        let result = solver.run(&mut dist, Ratio::from_integer(100));

        assert_eq!(result, Err(ZeroCancelError::ZeroDenominator));
    }
}
