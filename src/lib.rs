pub mod error;
pub mod flow;
pub mod model;
pub mod network;
pub mod scenario;

pub use error::{Error, Result};
pub use network::{build_network, AllocationNetwork, AllocationSummary};
