use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ROUNDS, STABILITY_EPSILON};
use crate::error::Result;


/// Parameters of [`AdaBoost`](super::AdaBoost).
/// Missing fields take their default values,
/// so `{}` is a valid configuration.
///
/// ```
/// use stumpboost::AdaBoostConfig;
///
/// let config = AdaBoostConfig::from_json(r#"{ "rounds": 20 }"#).unwrap();
/// assert_eq!(config.rounds, 20);
/// assert_eq!(config.epsilon, 1e-16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaBoostConfig {
    /// Number of boosting rounds.
    pub rounds: usize,
    /// Stability constant used in the vote weight and the normalizer.
    pub epsilon: f64,
}


impl Default for AdaBoostConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            epsilon: STABILITY_EPSILON,
        }
    }
}


impl AdaBoostConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }
}
