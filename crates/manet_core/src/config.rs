//! Simulation parameters and their validation.

use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Args;

use crate::error::SimError;
use crate::network::NodeId;

/// All knobs of a simulation run. With the `cli` feature enabled this
/// doubles as a clap argument group, so the binary exposes every field
/// as a `--flag` with the documented default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Args))]
pub struct SimConfig {
    /// Number of nodes at initialization
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 10))]
    pub num_nodes: u32,

    /// Energy floor: nodes strictly below it are pruned
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 20.0))]
    pub failure_threshold: f64,

    /// Maximum number of simulated rounds
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 5))]
    pub rounds: u32,

    /// Probability that any node pair is linked in a given round
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 0.5))]
    pub conn_prob: f64,

    /// Maximum edge weight in distance units
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 10))]
    pub max_dist: u32,

    /// Maximum number of hops considered per candidate path
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 4))]
    pub cutoff: usize,

    /// Energy cost per distance unit routed
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 1.0))]
    pub energy_cost_per_unit: f64,

    /// Source node id
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 0))]
    pub source_id: NodeId,

    /// Destination node id
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 9))]
    pub destination_id: NodeId,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_nodes: 10,
            failure_threshold: 20.0,
            rounds: 5,
            conn_prob: 0.5,
            max_dist: 10,
            cutoff: 4,
            energy_cost_per_unit: 1.0,
            source_id: 0,
            destination_id: 9,
        }
    }
}

impl SimConfig {
    /// Reject parameter combinations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_nodes == 0 {
            return Err(SimError::InvalidConfig("num_nodes must be at least 1".into()));
        }
        if self.rounds == 0 {
            return Err(SimError::InvalidConfig("rounds must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.conn_prob) {
            return Err(SimError::InvalidConfig(format!(
                "conn_prob must lie in [0, 1], got {}",
                self.conn_prob
            )));
        }
        if self.max_dist == 0 {
            return Err(SimError::InvalidConfig("max_dist must be at least 1".into()));
        }
        if self.cutoff == 0 {
            return Err(SimError::InvalidConfig("cutoff must be at least 1".into()));
        }
        if !self.energy_cost_per_unit.is_finite() || self.energy_cost_per_unit < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "energy_cost_per_unit must be finite and non-negative, got {}",
                self.energy_cost_per_unit
            )));
        }
        if !self.failure_threshold.is_finite() || self.failure_threshold < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "failure_threshold must be finite and non-negative, got {}",
                self.failure_threshold
            )));
        }
        if self.source_id >= self.num_nodes {
            return Err(SimError::InvalidConfig(format!(
                "source id {} is outside 0..{}",
                self.source_id, self.num_nodes
            )));
        }
        if self.destination_id >= self.num_nodes {
            return Err(SimError::InvalidConfig(format!(
                "destination id {} is outside 0..{}",
                self.destination_id, self.num_nodes
            )));
        }
        if self.source_id == self.destination_id {
            return Err(SimError::InvalidConfig(
                "source and destination must differ".into(),
            ));
        }
        Ok(())
    }
}
