//! Node and link storage for one simulation round.
//!
//! Adjacency is an explicit id-to-neighbor-set mapping next to an
//! edge-weight lookup keyed by the normalized pair. BTree collections
//! keep iteration order deterministic, which the path enumeration's
//! tie-break relies on.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

/// Identifier of a network node.
pub type NodeId = u32;

/// A node with a finite energy reserve. Energy is clamped at zero,
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub energy: f64,
}

impl Node {
    pub fn new(id: NodeId, energy: f64) -> Self {
        Self {
            id,
            energy: energy.max(0.0),
        }
    }
}

/// Normalized undirected edge key: smaller id first.
fn edge_key(u: NodeId, v: NodeId) -> (NodeId, NodeId) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// The surviving node set plus the current round's edges.
///
/// The node set only ever shrinks after initialization; the edge set is
/// fully replaced every round by the topology generator.
#[derive(Debug, Clone, Default)]
pub struct NetworkState {
    nodes: BTreeMap<NodeId, Node>,
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    weights: BTreeMap<(NodeId, NodeId), u32>,
}

impl NetworkState {
    /// Nodes `0..energies.len()` with the given energy levels and no edges.
    pub fn with_energies(energies: &[f64]) -> Self {
        let mut state = Self::default();
        for (id, &energy) in energies.iter().enumerate() {
            state.insert_node(Node::new(id as NodeId, energy));
        }
        state
    }

    /// Nodes `0..num_nodes` with energies drawn uniformly from `50..=100`.
    pub fn random<R: Rng>(num_nodes: u32, rng: &mut R) -> Self {
        let mut state = Self::default();
        for id in 0..num_nodes {
            let energy = rng.gen_range(50..=100) as f64;
            state.insert_node(Node::new(id, energy));
        }
        state
    }

    fn insert_node(&mut self, node: Node) {
        self.adjacency.insert(node.id, BTreeSet::new());
        self.nodes.insert(node.id, node);
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn energy(&self, id: NodeId) -> Option<f64> {
        self.nodes.get(&id).map(|n| n.energy)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Surviving node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Add an undirected edge. Self-loops and edges touching a missing
    /// node are ignored; re-inserting a pair overwrites its weight.
    pub fn insert_edge(&mut self, u: NodeId, v: NodeId, weight: u32) {
        if u == v || !self.contains(u) || !self.contains(v) {
            return;
        }
        self.weights.insert(edge_key(u, v), weight);
        if let Some(set) = self.adjacency.get_mut(&u) {
            set.insert(v);
        }
        if let Some(set) = self.adjacency.get_mut(&v) {
            set.insert(u);
        }
    }

    /// Drop every edge, keeping all nodes.
    pub fn clear_edges(&mut self) {
        self.weights.clear();
        for set in self.adjacency.values_mut() {
            set.clear();
        }
    }

    pub fn edge_weight(&self, u: NodeId, v: NodeId) -> Option<u32> {
        self.weights.get(&edge_key(u, v)).copied()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Edges as `((u, v), weight)` with `u < v`, ascending by key.
    pub fn edges(&self) -> impl Iterator<Item = ((NodeId, NodeId), u32)> + '_ {
        self.weights.iter().map(|(&k, &w)| (k, w))
    }

    /// Neighbors of `id` in ascending id order. Empty for unknown ids.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Remove a node together with all of its incident edges.
    pub fn remove_node(&mut self, id: NodeId) {
        if self.nodes.remove(&id).is_none() {
            return;
        }
        if let Some(neighbors) = self.adjacency.remove(&id) {
            for n in neighbors {
                if let Some(set) = self.adjacency.get_mut(&n) {
                    set.remove(&id);
                }
                self.weights.remove(&edge_key(id, n));
            }
        }
    }

    /// Debit `cost` from a node's reserve, clamped at zero. Unknown ids
    /// are ignored.
    pub fn drain(&mut self, id: NodeId, cost: f64) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.energy = (node.energy - cost).max(0.0);
        }
    }
}
