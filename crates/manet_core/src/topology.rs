//! Per-round random mobility model.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::network::{NetworkState, NodeId};

/// Regenerates the link set each round from scratch.
///
/// Owns a seeded PRNG: the same seed over the same surviving node set
/// produces the same topology, making runs reproducible.
#[derive(Debug, Clone)]
pub struct TopologyGenerator {
    rng: ChaCha20Rng,
    conn_prob: f64,
    max_dist: u32,
}

impl TopologyGenerator {
    pub fn new(seed: u64, conn_prob: f64, max_dist: u32) -> Self {
        Self::from_rng(ChaCha20Rng::seed_from_u64(seed), conn_prob, max_dist)
    }

    /// Continue an existing PRNG stream, e.g. the one that drew the
    /// initial node energies.
    pub fn from_rng(rng: ChaCha20Rng, conn_prob: f64, max_dist: u32) -> Self {
        Self {
            rng,
            conn_prob,
            max_dist,
        }
    }

    /// Replace the entire edge set: every unordered pair of surviving
    /// nodes, taken in ascending id order, gets an edge with probability
    /// `conn_prob` and a weight uniform in `1..=max_dist`. Nothing
    /// carries over from the previous round.
    pub fn regenerate(&mut self, state: &mut NetworkState) {
        state.clear_edges();
        let ids: Vec<NodeId> = state.node_ids().collect();
        for (i, &u) in ids.iter().enumerate() {
            for &v in &ids[i + 1..] {
                if self.rng.gen_bool(self.conn_prob) {
                    let weight = self.rng.gen_range(1..=self.max_dist);
                    state.insert_edge(u, v, weight);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_topology() {
        let mut a = TopologyGenerator::new(42, 0.5, 10);
        let mut b = TopologyGenerator::new(42, 0.5, 10);
        let mut state_a = NetworkState::with_energies(&[60.0; 8]);
        let mut state_b = NetworkState::with_energies(&[60.0; 8]);

        a.regenerate(&mut state_a);
        b.regenerate(&mut state_b);

        let edges_a: Vec<_> = state_a.edges().collect();
        let edges_b: Vec<_> = state_b.edges().collect();
        assert_eq!(edges_a, edges_b);
    }

    #[test]
    fn zero_probability_yields_no_edges() {
        let mut gen = TopologyGenerator::new(1, 0.0, 10);
        let mut state = NetworkState::with_energies(&[60.0; 6]);
        gen.regenerate(&mut state);
        assert_eq!(state.edge_count(), 0);
    }

    #[test]
    fn full_probability_yields_complete_graph() {
        let mut gen = TopologyGenerator::new(1, 1.0, 10);
        let mut state = NetworkState::with_energies(&[60.0; 6]);
        gen.regenerate(&mut state);
        // C(6, 2) pairs, each with a weight in range
        assert_eq!(state.edge_count(), 15);
        for ((u, v), w) in state.edges() {
            assert!(u < v);
            assert!((1..=10).contains(&w));
        }
    }

    #[test]
    fn regenerate_discards_previous_edges() {
        let mut state = NetworkState::with_energies(&[60.0; 4]);
        state.insert_edge(0, 1, 99);
        let mut gen = TopologyGenerator::new(7, 0.0, 10);
        gen.regenerate(&mut state);
        assert_eq!(state.edge_weight(0, 1), None);
    }
}
