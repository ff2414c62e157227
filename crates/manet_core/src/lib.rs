//! Round-based MANET (mobile ad-hoc network) simulation engine.
//!
//! Each round the link set is regenerated from a random mobility model,
//! nodes whose energy fell below the failure threshold are pruned, a
//! best path between a fixed source and destination is selected by an
//! energy-and-distance score, and routing over that path drains energy
//! from the nodes along it.
//!
//! All randomness flows through an explicitly seeded PRNG, so a run is
//! fully determined by its configuration and seed.

pub mod config;
pub mod energy;
pub mod error;
pub mod history;
pub mod network;
pub mod routing;
pub mod sim;
pub mod topology;

pub use config::SimConfig;
pub use energy::EnergyModel;
pub use error::SimError;
pub use history::{RoundRecord, RoundStatus};
pub use network::{NetworkState, Node, NodeId};
pub use routing::{PathSelector, Route};
pub use sim::{SimState, SimulationController};
pub use topology::TopologyGenerator;
