//! Energy accounting: routing cost along used paths and pruning of
//! exhausted nodes.

use crate::network::{NetworkState, NodeId};

/// Debits energy for routed traffic and removes nodes that fall below
/// the failure threshold.
#[derive(Debug, Clone, Copy)]
pub struct EnergyModel {
    cost_per_unit: f64,
    failure_threshold: f64,
}

impl EnergyModel {
    pub fn new(cost_per_unit: f64, failure_threshold: f64) -> Self {
        Self {
            cost_per_unit,
            failure_threshold,
        }
    }

    /// Charge both endpoints of every edge on `path` with
    /// `weight × cost_per_unit`, clamped at zero. An interior hop is
    /// adjacent to two edges and pays for each. An empty or single-node
    /// path is a no-op, as are edges missing from the current state.
    pub fn decay(&self, state: &mut NetworkState, path: &[NodeId]) {
        for pair in path.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            let Some(weight) = state.edge_weight(u, v) else {
                continue;
            };
            let cost = weight as f64 * self.cost_per_unit;
            state.drain(u, cost);
            state.drain(v, cost);
        }
    }

    /// Remove every node whose energy is strictly below the failure
    /// threshold; incident edges go with it. Returns the removed ids in
    /// ascending order.
    pub fn prune(&self, state: &mut NetworkState) -> Vec<NodeId> {
        let dead: Vec<NodeId> = state
            .nodes()
            .filter(|n| n.energy < self.failure_threshold)
            .map(|n| n.id)
            .collect();
        for &id in &dead {
            state.remove_node(id);
        }
        dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_charges_both_endpoints() {
        let mut state = NetworkState::with_energies(&[50.0, 50.0]);
        state.insert_edge(0, 1, 5);
        EnergyModel::new(1.0, 20.0).decay(&mut state, &[0, 1]);
        assert_eq!(state.energy(0), Some(45.0));
        assert_eq!(state.energy(1), Some(45.0));
    }

    #[test]
    fn interior_hop_pays_for_both_adjacent_edges() {
        let mut state = NetworkState::with_energies(&[50.0, 50.0, 50.0]);
        state.insert_edge(0, 1, 3);
        state.insert_edge(1, 2, 4);
        EnergyModel::new(1.0, 20.0).decay(&mut state, &[0, 1, 2]);
        assert_eq!(state.energy(0), Some(47.0));
        assert_eq!(state.energy(1), Some(43.0));
        assert_eq!(state.energy(2), Some(46.0));
    }

    #[test]
    fn decay_clamps_energy_at_zero() {
        let mut state = NetworkState::with_energies(&[2.0, 50.0]);
        state.insert_edge(0, 1, 10);
        EnergyModel::new(1.0, 20.0).decay(&mut state, &[0, 1]);
        assert_eq!(state.energy(0), Some(0.0));
        assert_eq!(state.energy(1), Some(40.0));
    }

    #[test]
    fn decay_on_empty_path_is_noop() {
        let mut state = NetworkState::with_energies(&[50.0, 50.0]);
        state.insert_edge(0, 1, 5);
        let before: Vec<_> = state.nodes().copied().collect();
        EnergyModel::new(1.0, 20.0).decay(&mut state, &[]);
        let after: Vec<_> = state.nodes().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn prune_removes_below_threshold_and_reports_ids() {
        let mut state = NetworkState::with_energies(&[100.0, 100.0, 5.0, 100.0]);
        state.insert_edge(0, 1, 10);
        state.insert_edge(1, 2, 1);
        let removed = EnergyModel::new(1.0, 20.0).prune(&mut state);
        assert_eq!(removed, vec![2]);
        assert!(!state.contains(2));
        assert_eq!(state.edge_weight(1, 2), None);
        assert_eq!(state.edge_weight(0, 1), Some(10));
    }

    #[test]
    fn prune_is_idempotent() {
        let mut state = NetworkState::with_energies(&[100.0, 10.0, 19.9, 20.0]);
        let model = EnergyModel::new(1.0, 20.0);
        let first = model.prune(&mut state);
        assert_eq!(first, vec![1, 2]);
        let second = model.prune(&mut state);
        assert!(second.is_empty());
        assert_eq!(state.node_count(), 2);
    }

    #[test]
    fn exact_threshold_survives() {
        let mut state = NetworkState::with_energies(&[20.0]);
        let removed = EnergyModel::new(1.0, 20.0).prune(&mut state);
        assert!(removed.is_empty());
        assert!(state.contains(0));
    }
}
