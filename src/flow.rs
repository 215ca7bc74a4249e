pub mod dinic;
pub mod graph;
pub mod multi;

pub use graph::{Edge, FlowNetwork};
pub use multi::MultiTerminal;
