//! Defines the [`Classifier`] trait and the combined hypothesis
//! [`WeightedMajority`] that boosting produces.

pub mod weighted_majority;

pub use weighted_majority::WeightedMajority;

use crate::Sample;
use crate::tools::helpers;


/// A trait that defines the function used in the combined classifier
/// of the boosting algorithms.
pub trait Classifier {
    /// Computes the confidence of the `row`-th example in `sample`.
    /// The sign of the confidence is the predicted label.
    fn confidence(&self, sample: &Sample, row: usize) -> f64;


    /// Predicts the label of the `row`-th example in `sample`.
    /// Zero confidence is predicted as `+1`.
    fn predict(&self, sample: &Sample, row: usize) -> i64 {
        helpers::sign(self.confidence(sample, row))
    }


    /// Computes the confidence of every example in `sample`.
    fn confidence_all(&self, sample: &Sample) -> Vec<f64> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.confidence(sample, row))
            .collect()
    }


    /// Predicts the labels of every example in `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<i64> {
        self.confidence_all(sample)
            .into_iter()
            .map(helpers::sign)
            .collect()
    }
}
