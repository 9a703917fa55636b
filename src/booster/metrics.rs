use serde::{Deserialize, Serialize};


/// The statistics recorded after each boosting round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundMetrics {
    /// Zero-based index of the round.
    pub round: usize,
    /// Weight of the stump added in this round.
    pub alpha: f64,
    /// Weighted training error of the stump added in this round.
    pub weighted_error: f64,
    /// Training error rate of the ensemble after this round.
    pub train_error: f64,
    /// Test error rate of the ensemble after this round.
    pub test_error: f64,
}
