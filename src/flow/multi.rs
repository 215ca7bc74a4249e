use std::fmt::Display;

use num_traits::{Bounded, NumAssign};

use crate::error::Result;

use super::graph::FlowNetwork;

/// Reduces a multi-source/multi-sink instance to an ordinary two-terminal
/// max-flow problem by adding a super-source and a super-sink.
///
/// The base graph keeps indices `0..base_nodes`; the super-source sits at
/// `base_nodes` and the super-sink at `base_nodes + 1`.
#[derive(Debug, Clone)]
pub struct MultiTerminal<F> {
    net: FlowNetwork<F>,
    source: usize,
    sink: usize,
}

impl<F> MultiTerminal<F>
where
    F: NumAssign + Ord + Copy + Bounded + Display,
{
    pub fn new(base_nodes: usize) -> Self {
        MultiTerminal {
            net: FlowNetwork::new(base_nodes + 2),
            source: base_nodes,
            sink: base_nodes + 1,
        }
    }

    pub fn super_source(&self) -> usize {
        self.source
    }

    pub fn super_sink(&self) -> usize {
        self.sink
    }

    /// Read access to the underlying residual graph, e.g. for extracting
    /// per-edge flow after a solve.
    pub fn network(&self) -> &FlowNetwork<F> {
        &self.net
    }

    /// Adds an interior edge between base nodes.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: F) -> Result<()> {
        self.net.add_edge(from, to, capacity)
    }

    /// Wires each `(node, cap)` pair to the super-source, capping that
    /// node's supply at `cap`.
    pub fn connect_sources(&mut self, sources: &[(usize, F)]) -> Result<()> {
        for &(node, cap) in sources {
            self.net.add_edge(self.source, node, cap)?;
        }
        Ok(())
    }

    /// Wires each `(node, cap)` pair to the super-sink, capping that node's
    /// demand at `cap`.
    pub fn connect_sinks(&mut self, sinks: &[(usize, F)]) -> Result<()> {
        for &(node, cap) in sinks {
            self.net.add_edge(node, self.sink, cap)?;
        }
        Ok(())
    }

    /// Maximum total flow that simultaneously respects every supply cap,
    /// every demand cap, and every interior capacity.
    pub fn solve(&mut self) -> F {
        let (s, t) = (self.source, self.sink);
        self.net.max_flow(s, t)
    }
}
