//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Upper bound on steps in one run when none is configured.
pub const DEFAULT_MAX_CHAIN_STEPS: usize = 64;

/// Tunables for a [`Machine`](crate::Machine).
///
/// Deserializable so the embedding service can carry it in its own config
/// file; missing fields take their defaults.
///
/// ```rust
/// use statetable::MachineConfig;
///
/// let config: MachineConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.max_chain_steps, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Maximum transitions executed by a single run call. Guards against
    /// cycles of `Event::NONE` transitions.
    pub max_chain_steps: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            max_chain_steps: DEFAULT_MAX_CHAIN_STEPS,
        }
    }
}
