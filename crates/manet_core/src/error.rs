use thiserror::Error;

/// Errors surfaced before a simulation run starts.
///
/// Everything that happens during a run (no path within the cutoff,
/// endpoint pruned) is a recorded outcome, not an error.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
