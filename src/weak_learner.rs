//! The core library for the weak learner in the boosting protocol.
//!
//! Given a weighting over training examples,
//! a weak learner returns a hypothesis whose weighted training error
//! is (hopefully) smaller than `1/2`.
//! The weak learners in this crate return the hypothesis that
//! **minimizes** the weighted training error among their class.

/// Defines the decision stump.
pub mod decision_stump;

pub use self::decision_stump::{
    DStump,
    DStumpClassifier,
    Polarity,
    Split,
};

use crate::Sample;


/// The output of [`WeakLearner::produce`]:
/// the chosen hypothesis together with its predictions on the
/// training sample and its weighted training error.
#[derive(Debug, Clone, PartialEq)]
pub struct WeakHypothesis<H> {
    /// The chosen hypothesis.
    pub hypothesis: H,
    /// `predictions[i]` is the label the hypothesis assigns to
    /// the `i`-th training example.
    pub predictions: Vec<i64>,
    /// Sum of the weights of the examples where
    /// `predictions` disagree with the labels.
    pub weighted_error: f64,
}


/// A trait that defines the behavor of a weak learner.
/// Boosters call [`WeakLearner::produce`] once per round.
pub trait WeakLearner {
    /// The hypothesis class of this weak learner.
    type Hypothesis;

    /// Returns the name of the weak learner.
    fn name(&self) -> &str;

    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }

    /// Returns the hypothesis that minimizes the weighted training error
    /// on `sample` for the weights `dist`.
    /// `dist` need not sum to `1`.
    fn produce(&self, sample: &Sample, dist: &[f64])
        -> WeakHypothesis<Self::Hypothesis>;
}
