#![warn(missing_docs)]

//!
//! A crate that provides AdaBoost over decision stumps
//! for binary classification.
//!
//! The crate consists of the following parts.
//!
//! - [`DStump`], a weak learner that searches every
//!   `(feature, threshold, polarity)` triple for the stump
//!   that minimizes the weighted training error.
//! - [`AdaBoost`], a booster that runs a fixed number of rounds
//!   and re-weights the training examples after each round.
//! - [`WeightedMajority`], the resulting ensemble of weighted stumps.
//! - [`research::Logger`], which runs a booster round by round and
//!   writes the [`RoundMetrics`] of each round to a [`research::MetricsSink`].
//!
//! Labels are `-1` or `+1`.
//! A score of exactly zero is predicted as `+1`.
//!
//! # Example
//! ```
//! use stumpboost::prelude::*;
//!
//! let rows = [[1.0, 0.0], [2.0, 1.0], [3.0, 0.0], [4.0, 1.0]];
//! let target = vec![-1.0, -1.0, 1.0, 1.0];
//! let train = Sample::from_rows(&rows[..], target).unwrap();
//! let test = train.clone();
//!
//! let weak_learner = DStump::init(&train);
//! let mut booster = AdaBoost::init(&train, &test)
//!     .rounds(10);
//!
//! let f = booster.run(&weak_learner).unwrap();
//! assert_eq!(f.check(&test), 0.0);
//! ```

pub mod constants;
pub mod error;
pub mod sample;
pub mod tools;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod research;
pub mod prelude;


pub use constants::STABILITY_EPSILON;
pub use error::BoostError;

pub use sample::{Sample, SampleReader};

pub use hypothesis::{Classifier, WeightedMajority};

pub use weak_learner::{
    WeakLearner,
    WeakHypothesis,

    DStump,
    DStumpClassifier,
    Split,
    Polarity,
};

pub use booster::{
    Booster,
    AdaBoost,
    AdaBoostConfig,
    RoundMetrics,
};
