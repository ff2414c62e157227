//! Per-round outcome records and their console rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::network::NodeId;
use crate::routing::Route;

/// Outcome classification for one simulated round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    PathFound,
    NoPathFound,
    EndpointLost,
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundStatus::PathFound => "Path found",
            RoundStatus::NoPathFound => "No path found",
            RoundStatus::EndpointLost => "Source or destination removed",
        };
        f.write_str(s)
    }
}

/// One entry of the simulation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    /// Ids pruned this round, ascending.
    pub removed: Vec<NodeId>,
    pub path: Option<Vec<NodeId>>,
    pub total_distance: Option<u32>,
    pub min_energy: Option<f64>,
    pub score: Option<f64>,
    pub status: RoundStatus,
}

impl RoundRecord {
    pub fn path_found(round: u32, removed: Vec<NodeId>, route: &Route) -> Self {
        Self {
            round,
            removed,
            path: Some(route.hops.clone()),
            total_distance: Some(route.total_distance),
            min_energy: Some(route.min_energy),
            score: Some(route.score),
            status: RoundStatus::PathFound,
        }
    }

    pub fn no_path(round: u32, removed: Vec<NodeId>) -> Self {
        Self {
            round,
            removed,
            path: None,
            total_distance: None,
            min_energy: None,
            score: None,
            status: RoundStatus::NoPathFound,
        }
    }

    pub fn endpoint_lost(round: u32, removed: Vec<NodeId>) -> Self {
        Self {
            round,
            removed,
            path: None,
            total_distance: None,
            min_energy: None,
            score: None,
            status: RoundStatus::EndpointLost,
        }
    }
}

impl fmt::Display for RoundRecord {
    /// `Round 1 | Dead: [2] | Path: [0, 3, 9] | Dist: 7 | MinE: 54 | Score: 0.130 | Status: Path found`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Round {} | Dead: {:?} | ", self.round, self.removed)?;
        match &self.path {
            Some(path) => write!(f, "Path: {:?} | ", path)?,
            None => write!(f, "Path: - | ")?,
        }
        match self.total_distance {
            Some(d) => write!(f, "Dist: {} | ", d)?,
            None => write!(f, "Dist: - | ")?,
        }
        match self.min_energy {
            Some(e) => write!(f, "MinE: {} | ", e)?,
            None => write!(f, "MinE: - | ")?,
        }
        match (self.score, self.status) {
            (Some(s), _) => write!(f, "Score: {:.3} | ", s)?,
            // No route within the cutoff renders as an infinite score.
            (None, RoundStatus::NoPathFound) => write!(f, "Score: inf | ")?,
            (None, _) => write!(f, "Score: - | ")?,
        }
        write!(f, "Status: {}", self.status)
    }
}
