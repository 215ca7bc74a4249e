use std::cmp::min;
use std::collections::VecDeque;
use std::fmt::Display;

use log::debug;
use num_traits::{Bounded, NumAssign};

use super::graph::FlowNetwork;

impl<F> FlowNetwork<F>
where
    F: NumAssign + Ord + Copy + Bounded + Display,
{
    /// BFS from `s` over positive-residual edges, writing each reachable
    /// node's distance into `level`. Returns whether `t` was reached.
    fn assign_levels(&self, s: usize, t: usize, level: &mut [i32]) -> bool {
        level.fill(-1);
        level[s] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(s);

        while let Some(u) = queue.pop_front() {
            for edge in self.edges(u) {
                if edge.residual > F::zero() && level[edge.to] == -1 {
                    level[edge.to] = level[u] + 1;
                    queue.push_back(edge.to);
                }
            }
        }
        level[t] != -1
    }

    /// One DFS augmentation within the current level graph. `arc` holds the
    /// per-node current-arc pointer: an edge that dead-ended once is never
    /// retried within this phase.
    fn augment(&mut self, u: usize, t: usize, limit: F, level: &[i32], arc: &mut [usize]) -> F {
        if u == t {
            return limit;
        }
        while arc[u] < self.edges(u).len() {
            let i = arc[u];
            let (to, rev, residual) = {
                let edge = &self.edges(u)[i];
                (edge.to, edge.rev, edge.residual)
            };

            if residual > F::zero() && level[to] == level[u] + 1 {
                let pushed = self.augment(to, t, min(limit, residual), level, arc);
                if pushed > F::zero() {
                    self.edge_mut(u, i).residual -= pushed;
                    self.edge_mut(to, rev).residual += pushed;
                    return pushed;
                }
            }
            arc[u] += 1;
        }
        F::zero()
    }

    /// Maximum flow from `s` to `t`, mutating residual capacities in place.
    ///
    /// Phase-based blocking flow: each phase rebuilds the level graph with a
    /// BFS and then exhausts it with current-arc DFS augmentations. An
    /// unreachable `t` is the normal terminal condition, not an error.
    pub fn max_flow(&mut self, s: usize, t: usize) -> F {
        let n = self.node_count();
        if n == 0 || s == t {
            return F::zero();
        }

        let mut total = F::zero();
        let mut level = vec![-1i32; n];
        let mut phase = 0u32;

        while self.assign_levels(s, t, &mut level) {
            let mut arc = vec![0usize; n];
            let mut phase_total = F::zero();
            loop {
                let pushed = self.augment(s, t, F::max_value(), &level, &mut arc);
                if pushed == F::zero() {
                    break;
                }
                phase_total += pushed;
            }
            total += phase_total;
            phase += 1;
            debug!("max-flow phase {phase}: pushed {phase_total}, total {total}");
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_flow() {
        let mut net: FlowNetwork<i64> = FlowNetwork::new(6);
        net.add_edge(0, 1, 10).unwrap();
        net.add_edge(0, 2, 10).unwrap();
        net.add_edge(1, 3, 4).unwrap();
        net.add_edge(1, 4, 8).unwrap();
        net.add_edge(2, 4, 9).unwrap();
        net.add_edge(3, 5, 10).unwrap();
        net.add_edge(4, 3, 6).unwrap();
        net.add_edge(4, 5, 10).unwrap();

        assert_eq!(net.max_flow(0, 5), 19);
    }

    #[test]
    fn test_max_flow_disconnected() {
        let mut net: FlowNetwork<i64> = FlowNetwork::new(4);
        net.add_edge(0, 1, 10).unwrap();
        net.add_edge(2, 3, 5).unwrap();
        assert_eq!(net.max_flow(0, 3), 0);
    }

    #[test]
    fn test_max_flow_unreachable_sink() {
        let mut net: FlowNetwork<i64> = FlowNetwork::new(3);
        net.add_edge(0, 1, 10).unwrap();
        assert_eq!(net.max_flow(0, 2), 0);
    }

    #[test]
    fn test_max_flow_multiple_paths() {
        let mut net: FlowNetwork<i64> = FlowNetwork::new(4);
        net.add_edge(0, 1, 10).unwrap();
        net.add_edge(0, 2, 5).unwrap();
        net.add_edge(1, 3, 10).unwrap();
        net.add_edge(2, 3, 5).unwrap();
        assert_eq!(net.max_flow(0, 3), 15);
    }

    #[test]
    fn test_max_flow_complex() {
        let mut net: FlowNetwork<i64> = FlowNetwork::new(7);
        net.add_edge(0, 1, 10).unwrap();
        net.add_edge(0, 2, 5).unwrap();
        net.add_edge(1, 3, 9).unwrap();
        net.add_edge(1, 4, 3).unwrap();
        net.add_edge(2, 4, 7).unwrap();
        net.add_edge(2, 5, 2).unwrap();
        net.add_edge(3, 6, 10).unwrap();
        net.add_edge(4, 6, 10).unwrap();
        net.add_edge(5, 6, 5).unwrap();
        assert_eq!(net.max_flow(0, 6), 15);
    }

    #[test]
    fn test_max_flow_zero_capacity_edge_carries_nothing() {
        let mut net: FlowNetwork<i64> = FlowNetwork::new(2);
        net.add_edge(0, 1, 0).unwrap();
        assert_eq!(net.max_flow(0, 1), 0);
        assert_eq!(net.edges(0)[0].sent(), 0);
    }

    #[test]
    fn test_residual_pairs_stay_balanced_after_solve() {
        let mut net: FlowNetwork<i64> = FlowNetwork::new(6);
        net.add_edge(0, 1, 10).unwrap();
        net.add_edge(0, 2, 10).unwrap();
        net.add_edge(1, 3, 4).unwrap();
        net.add_edge(1, 4, 8).unwrap();
        net.add_edge(2, 4, 9).unwrap();
        net.add_edge(3, 5, 10).unwrap();
        net.add_edge(4, 3, 6).unwrap();
        net.add_edge(4, 5, 10).unwrap();
        net.max_flow(0, 5);

        for u in 0..net.node_count() {
            for edge in net.edges(u) {
                let partner = &net.edges(edge.to)[edge.rev];
                assert!(edge.residual >= 0);
                assert_eq!(
                    edge.residual + partner.residual,
                    edge.original + partner.original
                );
            }
        }
    }

    #[test]
    fn test_max_flow_source_equals_sink() {
        let mut net: FlowNetwork<i64> = FlowNetwork::new(2);
        net.add_edge(0, 1, 10).unwrap();
        assert_eq!(net.max_flow(0, 0), 0);
    }
}
