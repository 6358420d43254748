//! Negative cycle detection via Howard's policy-iteration method.
//!
//! The `NegCycleFinder` performs repeated Bellman-Ford relaxation passes
//! over a [`DiGraph`] and, after each pass, inspects the implicit
//! predecessor forest (the "policy") for cycles. A cycle in the policy
//! graph that is still weight-negative under the caller's weight function
//! is reported to the caller; [`ParametricSolver`](crate::parametric)
//! drives this repeatedly with an updated weight function to binary-search
//! the optimal cost/time ratio.

use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::visit::IntoNodeIdentifiers;
use std::collections::HashMap;
use std::ops::Add;

/// Finds negative cycles in a directed graph via Howard's method.
///
/// The predecessor map (`pred`) is private: it is the "policy" of §3/§4.1,
/// created empty at the start of every [`howard`](Self::howard) call and
/// discarded when the finder is dropped.
#[derive(Debug)]
pub struct NegCycleFinder<'a, Value, EdgeWeight> {
    pub digraph: &'a DiGraph<Value, EdgeWeight>,
    pred: HashMap<NodeIndex, (NodeIndex, EdgeReference<'a, EdgeWeight>)>,
    max_relax_passes: Option<usize>,
}

impl<'a, Value, EdgeWeight> NegCycleFinder<'a, Value, EdgeWeight> {
    /// Binds a read-only graph view. The graph is never mutated by the
    /// finder.
    pub fn new(digraph: &'a DiGraph<Value, EdgeWeight>) -> Self {
        NegCycleFinder {
            digraph,
            pred: HashMap::new(),
            max_relax_passes: None,
        }
    }

    /// Bounds the number of relax passes a single [`howard`](Self::howard)
    /// call will perform. Intended as a safety net for floating-point
    /// `Domain`s where Bellman-Ford may not terminate exactly; exceeding
    /// the cap silently ends the cycle stream rather than erroring.
    pub fn with_max_relax_passes(mut self, max_relax_passes: usize) -> Self {
        self.max_relax_passes = Some(max_relax_passes);
        self
    }

    /// Finds every node lying on a cycle of the current policy graph, one
    /// representative node per distinct cycle, using the colour-by-seed
    /// scheme: each node is visited at most twice across the whole pass, so
    /// this is `O(|V|)` amortised.
    pub fn find_cycle(&self) -> Vec<NodeIndex> {
        let mut visited: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut found = Vec::new();
        for vtx in self.digraph.node_identifiers() {
            if visited.contains_key(&vtx) {
                continue;
            }
            let mut utx = vtx;
            visited.insert(utx, vtx);
            loop {
                let Some(&(prev, _)) = self.pred.get(&utx) else {
                    break;
                };
                utx = prev;
                if let Some(&seed) = visited.get(&utx) {
                    if seed == vtx {
                        found.push(utx);
                    }
                    break;
                }
                visited.insert(utx, vtx);
            }
        }
        found
    }

    /// Reconstructs the edge sequence of the cycle passing through `handle`
    /// by walking policy links back to `handle`.
    ///
    /// Calling this on a node with no policy entry is a contract violation
    /// (§7): it is only ever called here with handles produced by
    /// [`find_cycle`](Self::find_cycle), which guarantees a policy entry
    /// exists.
    fn cycle_list(&self, handle: NodeIndex) -> Vec<EdgeReference<'a, EdgeWeight>> {
        let mut vtx = handle;
        let mut cycle = Vec::new();
        loop {
            let &(utx, edge) = self
                .pred
                .get(&vtx)
                .expect("cycle_list: handle has no policy entry");
            cycle.push(edge);
            vtx = utx;
            if vtx == handle {
                break;
            }
        }
        cycle
    }
}

impl<'a, Value, EdgeWeight> NegCycleFinder<'a, Value, EdgeWeight> {
    /// Performs one Bellman-Ford pass in the graph's iteration order,
    /// updating `dist` and the policy map wherever an edge improves a
    /// target node. Returns whether anything changed.
    pub fn relax<Domain, Callable>(&mut self, dist: &mut [Domain], get_weight: &Callable) -> bool
    where
        Domain: Add<Output = Domain> + PartialOrd + Copy,
        Callable: Fn(EdgeReference<'a, EdgeWeight>) -> Domain,
    {
        let mut changed = false;
        for utx in self.digraph.node_identifiers() {
            for edge in self.digraph.edges(utx) {
                let vtx = edge.target();
                let weight = get_weight(edge);
                let distance = dist[utx.index()] + weight;
                if dist[vtx.index()] > distance {
                    dist[vtx.index()] = distance;
                    self.pred.insert(vtx, (utx, edge));
                    changed = true;
                }
            }
        }
        changed
    }

    /// Verifies that the cycle through `handle` still has a negative
    /// `w`-weighted sum under the current `dist`/policy state, i.e. some
    /// edge on it still violates `dist[v] >= dist[u] + w(e)`.
    pub fn is_negative<Domain, Callable>(
        &self,
        handle: NodeIndex,
        dist: &[Domain],
        get_weight: &Callable,
    ) -> bool
    where
        Domain: Add<Output = Domain> + PartialOrd + Copy,
        Callable: Fn(EdgeReference<'a, EdgeWeight>) -> Domain,
    {
        let mut vtx = handle;
        loop {
            let &(utx, edge) = self
                .pred
                .get(&vtx)
                .expect("is_negative: handle has no policy entry");
            let weight = get_weight(edge);
            if dist[vtx.index()] > dist[utx.index()] + weight {
                return true;
            }
            vtx = utx;
            if vtx == handle {
                break;
            }
        }
        false
    }

    /// Howard's method: clears the policy, then alternates `relax` with
    /// cycle extraction until either a full pass makes no change (the
    /// stream ends empty) or a pass yields at least one negative cycle (the
    /// stream yields those cycles, then ends — the caller is expected to
    /// re-parameterise its weight function and call `howard` again).
    ///
    /// # Examples
    ///
    /// ```
    /// use petgraph::prelude::*;
    /// use cycleratio_rs::neg_cycle::NegCycleFinder;
    /// let digraph = DiGraph::<(), i32>::from_edges([
    ///     (0, 1, 1),
    ///     (0, 2, 1),
    ///     (0, 3, 1),
    ///     (1, 3, 1),
    ///     (2, 1, 1),
    ///     (3, 2, -3),
    /// ]);
    /// let mut ncf = NegCycleFinder::new(&digraph);
    /// let mut dist = [0, 0, 0, 0];
    /// let mut cycles = ncf.howard(&mut dist, |e| *e.weight());
    /// assert!(cycles.next().is_some());
    /// ```
    pub fn howard<'b, Domain, Callable>(
        &'b mut self,
        dist: &'b mut [Domain],
        get_weight: Callable,
    ) -> CyclesInPass<'a, 'b, Value, EdgeWeight, Domain, Callable>
    where
        Domain: Add<Output = Domain> + PartialOrd + Copy,
        Callable: Fn(EdgeReference<'a, EdgeWeight>) -> Domain,
    {
        self.pred.clear();
        CyclesInPass {
            finder: self,
            dist,
            get_weight,
            pending: Vec::new().into_iter(),
            yielded_this_batch: false,
            finished: false,
            passes: 0,
        }
    }
}

/// The lazy cycle stream returned by [`NegCycleFinder::howard`].
///
/// Each [`next`](Iterator::next) call performs at most one relax pass; a
/// caller that stops pulling simply leaves `dist` and any already-yielded
/// cycles in a valid, inspectable state (§5 cancellation).
pub struct CyclesInPass<'a, 'b, Value, EdgeWeight, Domain, Callable> {
    finder: &'b mut NegCycleFinder<'a, Value, EdgeWeight>,
    dist: &'b mut [Domain],
    get_weight: Callable,
    pending: std::vec::IntoIter<NodeIndex>,
    yielded_this_batch: bool,
    finished: bool,
    passes: usize,
}

impl<'a, 'b, Value, EdgeWeight, Domain, Callable> Iterator
    for CyclesInPass<'a, 'b, Value, EdgeWeight, Domain, Callable>
where
    Domain: Add<Output = Domain> + PartialOrd + Copy,
    Callable: Fn(EdgeReference<'a, EdgeWeight>) -> Domain,
{
    type Item = Vec<EdgeReference<'a, EdgeWeight>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while let Some(handle) = self.pending.next() {
                if self.finder.is_negative(handle, self.dist, &self.get_weight) {
                    self.yielded_this_batch = true;
                    return Some(self.finder.cycle_list(handle));
                }
            }

            if self.yielded_this_batch {
                self.finished = true;
            }
            if self.finished {
                return None;
            }

            if let Some(cap) = self.finder.max_relax_passes {
                if self.passes >= cap {
                    #[cfg(feature = "std")]
                    log::warn!(
                        "NegCycleFinder: max_relax_passes ({cap}) reached without convergence"
                    );
                    self.finished = true;
                    return None;
                }
            }
            self.passes += 1;
            #[cfg(feature = "std")]
            log::debug!("NegCycleFinder: relax pass {}", self.passes);

            if !self.finder.relax(self.dist, &self.get_weight) {
                self.finished = true;
                return None;
            }

            self.yielded_this_batch = false;
            self.pending = self.finder.find_cycle().into_iter();
        }
    }
}
