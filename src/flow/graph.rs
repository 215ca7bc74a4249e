use num_traits::NumAssign;

use crate::error::{Error, Result};

/// Directed arc in the residual graph.
///
/// Every forward edge is paired with a zero-capacity reverse edge in the
/// destination's adjacency list; `rev` is the position of that partner so
/// both sides of an augmentation can be updated in O(1).
#[derive(Debug, Clone)]
pub struct Edge<F> {
    /// Destination node index.
    pub to: usize,
    /// Position of the paired reverse edge within `to`'s adjacency list.
    pub rev: usize,
    /// Remaining capacity.
    pub residual: F,
    /// Capacity at construction time. Flow sent = original - residual.
    pub original: F,
}

impl<F: NumAssign + Copy> Edge<F> {
    /// Flow currently routed through this edge.
    pub fn sent(&self) -> F {
        self.original - self.residual
    }
}

/// Residual graph over a flat arena of integer-indexed nodes.
///
/// Node semantics (order, vehicle, terminal) are assigned by the caller via
/// index ranges; the graph itself stores nothing but adjacency lists. The
/// structure is append-only: edges are added up front and only their
/// residual capacities mutate afterwards.
#[derive(Debug, Clone)]
pub struct FlowNetwork<F> {
    adj: Vec<Vec<Edge<F>>>,
}

impl<F: NumAssign + Ord + Copy> FlowNetwork<F> {
    pub fn new(size: usize) -> Self {
        FlowNetwork {
            adj: vec![Vec::new(); size],
        }
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Edges leaving `node`, in insertion order.
    pub fn edges(&self, node: usize) -> &[Edge<F>] {
        &self.adj[node]
    }

    pub(crate) fn edge_mut(&mut self, node: usize, idx: usize) -> &mut Edge<F> {
        &mut self.adj[node][idx]
    }

    /// Appends a forward edge `from -> to` with the given capacity and its
    /// zero-capacity reverse edge `to -> from`.
    ///
    /// Capacities are re-validated here even when upstream constructors
    /// already checked them: a negative capacity would silently corrupt the
    /// residual invariants of the solver.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: F) -> Result<()> {
        if from >= self.adj.len() || to >= self.adj.len() {
            return Err(Error::InvalidVertex);
        }
        if capacity < F::zero() {
            return Err(Error::NegativeCapacity);
        }
        let rev_pos = self.adj[to].len();
        let fwd_pos = self.adj[from].len();
        self.adj[from].push(Edge {
            to,
            rev: rev_pos,
            residual: capacity,
            original: capacity,
        });
        self.adj[to].push(Edge {
            to: from,
            rev: fwd_pos,
            residual: F::zero(),
            original: F::zero(),
        });
        Ok(())
    }
}
