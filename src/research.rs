//! This directory provides some features for research.
//! Measure the followings of boosting algorithm per round
//! - Running time
//! - Weight on the new hypothesis
//! - Weighted training error of the new hypothesis
//! - Training error of the ensemble
//! - Test error of the ensemble

/// Provides an algorithm that runs a boosting algorithm with logging.
pub mod logger;

/// Defines the destinations of the per-round metrics.
pub mod sink;

pub use logger::Logger;
pub use sink::{
    MetricsSink,
    CsvSink,
    JsonLinesSink,
};

use crate::booster::RoundMetrics;


/// Boosters that expose the metrics of the latest completed round.
/// [`Logger`] reads them after each call of
/// [`Booster::boost`](crate::Booster::boost).
pub trait Research {
    /// Returns the metrics of the latest completed round,
    /// or `None` if no round has completed.
    fn current_metrics(&self) -> Option<&RoundMetrics>;
}
