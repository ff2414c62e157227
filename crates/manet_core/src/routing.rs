//! Bounded simple-path enumeration and scoring.

use serde::{Deserialize, Serialize};

use crate::network::{NetworkState, NodeId};

/// A selected route with its scoring inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub hops: Vec<NodeId>,
    pub total_distance: u32,
    pub min_energy: f64,
    pub score: f64,
}

/// Depth-bounded route search between two endpoints.
///
/// Candidate paths are all simple paths with at most `cutoff` edges.
/// Each is scored as total edge weight divided by the scarcest energy
/// on the path; the lowest score wins. Neighbors are visited in
/// ascending id order, so enumeration is lexicographic by node sequence
/// and ties go to the lexicographically smallest path.
///
/// Nodes at exactly zero energy are ineligible for path membership,
/// which keeps `min_energy` strictly positive and the score finite.
#[derive(Debug, Clone, Copy)]
pub struct PathSelector {
    cutoff: usize,
}

impl PathSelector {
    pub fn new(cutoff: usize) -> Self {
        Self { cutoff }
    }

    /// Best route from `source` to `dest`, or `None` when the endpoints
    /// are not connected within the hop cutoff. Absence of a route is an
    /// ordinary outcome, not an error. A degenerate query with
    /// `source == dest` also yields `None`: routing to yourself uses no
    /// edges and has no meaningful score.
    pub fn best_path(
        &self,
        state: &NetworkState,
        source: NodeId,
        dest: NodeId,
    ) -> Option<Route> {
        if source == dest {
            return None;
        }
        if state.energy(source).unwrap_or(0.0) <= 0.0 {
            return None;
        }
        let mut best = None;
        let mut path = vec![source];
        self.search(state, source, dest, 0, &mut path, &mut best);
        best
    }

    fn search(
        &self,
        state: &NetworkState,
        current: NodeId,
        dest: NodeId,
        distance: u32,
        path: &mut Vec<NodeId>,
        best: &mut Option<Route>,
    ) {
        if current == dest {
            let min_energy = path
                .iter()
                .filter_map(|&id| state.energy(id))
                .fold(f64::INFINITY, f64::min);
            let score = distance as f64 / min_energy;
            if best.as_ref().map_or(true, |b| score < b.score) {
                *best = Some(Route {
                    hops: path.clone(),
                    total_distance: distance,
                    min_energy,
                    score,
                });
            }
            return;
        }
        // path.len() - 1 edges used so far
        if path.len() > self.cutoff {
            return;
        }
        let neighbors: Vec<NodeId> = state.neighbors(current).collect();
        for v in neighbors {
            if path.contains(&v) {
                continue;
            }
            if state.energy(v).unwrap_or(0.0) <= 0.0 {
                continue;
            }
            let Some(weight) = state.edge_weight(current, v) else {
                continue;
            };
            path.push(v);
            self.search(state, v, dest, distance + weight, path, best);
            path.pop();
        }
    }
}
