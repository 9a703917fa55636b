//! Exports the standard boosting algorithms and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    AdaBoost,
    AdaBoostConfig,
    RoundMetrics,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,
    WeakHypothesis,

    DStump,
    DStumpClassifier,
    Split,
    Polarity,
};


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::sample::{
    Sample,
    SampleReader,
};


pub use crate::error::BoostError;


pub use crate::constants::STABILITY_EPSILON;
