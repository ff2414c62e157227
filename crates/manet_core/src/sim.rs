//! Round sequencing: mobility, pruning, routing, decay.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::energy::EnergyModel;
use crate::error::SimError;
use crate::history::RoundRecord;
use crate::network::NetworkState;
use crate::routing::PathSelector;
use crate::topology::TopologyGenerator;

/// Lifecycle of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimState {
    Running,
    /// Source or destination was pruned; terminal.
    EndpointLost,
    /// The configured round count was exhausted; terminal.
    Completed,
}

/// Owns the network state for the duration of a run and drives one
/// round at a time. Components only ever receive per-stage borrows.
pub struct SimulationController {
    config: SimConfig,
    network: NetworkState,
    topology: TopologyGenerator,
    energy: EnergyModel,
    selector: PathSelector,
    history: Vec<RoundRecord>,
    round: u32,
    state: SimState,
}

impl SimulationController {
    /// Build a controller from a validated config. Initial node energies
    /// and all subsequent topology draws come from one PRNG stream
    /// seeded with `seed`, so a run is reproducible from `(config, seed)`.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let network = NetworkState::random(config.num_nodes, &mut rng);
        Ok(Self::assemble(config, network, rng))
    }

    /// Build a controller over a caller-supplied initial network, e.g.
    /// with hand-picked energies. The seed only drives topology.
    pub fn with_network(
        config: SimConfig,
        network: NetworkState,
        seed: u64,
    ) -> Result<Self, SimError> {
        config.validate()?;
        let rng = ChaCha20Rng::seed_from_u64(seed);
        Ok(Self::assemble(config, network, rng))
    }

    fn assemble(config: SimConfig, network: NetworkState, rng: ChaCha20Rng) -> Self {
        let topology = TopologyGenerator::from_rng(rng, config.conn_prob, config.max_dist);
        let energy = EnergyModel::new(config.energy_cost_per_unit, config.failure_threshold);
        let selector = PathSelector::new(config.cutoff);
        Self {
            config,
            network,
            topology,
            energy,
            selector,
            history: Vec::new(),
            round: 0,
            state: SimState::Running,
        }
    }

    /// Execute one round. No-op once the run has reached a terminal
    /// state. Spending the last budgeted round transitions to
    /// `Completed`, so stepping until `state()` leaves `Running` always
    /// terminates.
    pub fn step(&mut self) {
        if self.state != SimState::Running {
            return;
        }
        self.round += 1;

        self.topology.regenerate(&mut self.network);
        let removed = self.energy.prune(&mut self.network);

        if !self.network.contains(self.config.source_id)
            || !self.network.contains(self.config.destination_id)
        {
            self.history
                .push(RoundRecord::endpoint_lost(self.round, removed));
            self.state = SimState::EndpointLost;
            return;
        }

        match self
            .selector
            .best_path(&self.network, self.config.source_id, self.config.destination_id)
        {
            Some(route) => {
                self.history
                    .push(RoundRecord::path_found(self.round, removed, &route));
                self.energy.decay(&mut self.network, &route.hops);
            }
            None => {
                // No decay this round; the simulation keeps going.
                self.history.push(RoundRecord::no_path(self.round, removed));
            }
        }

        if self.round >= self.config.rounds {
            self.state = SimState::Completed;
        }
    }

    /// Run until a terminal state, then return the full history.
    pub fn run(&mut self) -> &[RoundRecord] {
        while self.state == SimState::Running {
            self.step();
        }
        &self.history
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn network(&self) -> &NetworkState {
        &self.network
    }

    pub fn rounds_executed(&self) -> u32 {
        self.round
    }
}
