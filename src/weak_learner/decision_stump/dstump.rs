//! Provides the decision stump class.
use rayon::prelude::*;

use std::cmp::Ordering;

use crate::{
    tools::helpers,
    Sample,
    WeakLearner,
};
use crate::weak_learner::WeakHypothesis;

use super::{DStumpClassifier, Polarity, Split};


/// Returns the distinct values of `column` in ascending order.
/// These are the candidate thresholds on that feature.
fn thresholds(column: &[f64]) -> Vec<f64> {
    let mut vals = column.to_vec();
    vals.sort_by(|a, b| a.total_cmp(b));
    vals.dedup();
    vals
}


/// The struct `DStump` generates a [`DStumpClassifier`]
/// for each call of `self.produce(..)`.
///
/// The search is exhaustive: for every feature `j`,
/// every distinct value `t` observed in the `j`-th column
/// of the sample passed to `produce`,
/// and both polarities, it computes the weighted error of the stump
/// and returns the one with the minimum error.
/// Ties are broken by [`Split::tie_break`],
/// so the result does not depend on the evaluation order.
///
/// Time complexity: `O(d * u * m)`, where
/// - `d` is the number of features,
/// - `u` is the average number of distinct values per feature, and
/// - `m` is the number of training examples.
///
/// ```
/// use stumpboost::prelude::*;
///
/// let rows = [[0.0], [1.0], [2.0], [3.0]];
/// let sample = Sample::from_rows(&rows[..], vec![-1.0, -1.0, 1.0, 1.0])
///     .unwrap();
///
/// let weak_learner = DStump::init(&sample);
/// let dist = vec![0.25; 4];
/// let out = weak_learner.produce(&sample, &dist[..]);
///
/// assert_eq!(out.weighted_error, 0.0);
/// assert_eq!(out.predictions, vec![-1, -1, 1, 1]);
/// ```
pub struct DStump {
    // Shape of the sample given to `init`, reported by `info`.
    n_sample: usize,
    n_feature: usize,
}


impl DStump {
    /// Initializes and produce an instance of `DStump`.
    /// `sample` only sets the shape reported by `info`;
    /// the candidate thresholds are read from the sample
    /// given to each call of `produce`.
    pub fn init(sample: &Sample) -> Self {
        let (n_sample, n_feature) = sample.shape();
        Self { n_sample, n_feature }
    }


    /// Returns the number of candidate stumps examined
    /// by `produce` on `sample`.
    pub fn n_candidates(&self, sample: &Sample) -> usize {
        sample.features()
            .par_iter()
            .map(|column| 2 * thresholds(column).len())
            .sum::<usize>()
    }


    /// Returns the best candidate on the `j`-th feature.
    fn best_split_at(&self, sample: &Sample, dist: &[f64], j: usize)
        -> Option<Candidate>
    {
        let column = &sample[j];
        let target = sample.target();

        let mut best: Option<Candidate> = None;
        for threshold in thresholds(column) {
            for polarity in [Polarity::Gte, Polarity::Lte] {
                let split = Split::new(j, threshold, polarity);
                let predictions = column.iter().map(|&x| split.label(x));
                let mistakes = helpers::mistakes(predictions, target);
                let weighted_error = helpers::weighted_error(&mistakes, dist);

                let candidate = Candidate { split, weighted_error };
                best = Some(match best {
                    Some(b) => b.min(candidate),
                    None => candidate,
                });
            }
        }
        best
    }
}


impl WeakLearner for DStump {
    type Hypothesis = DStumpClassifier;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of examples", format!("{}", self.n_sample)),
            ("# of features", format!("{}", self.n_feature)),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample, dist: &[f64])
        -> WeakHypothesis<Self::Hypothesis>
    {
        let (n_sample, n_feature) = sample.shape();
        assert_eq!(dist.len(), n_sample);

        let best = (0..n_feature).into_par_iter()
            .filter_map(|j| self.best_split_at(sample, dist, j))
            .reduce_with(Candidate::min);

        let hypothesis = match best {
            Some(candidate) => DStumpClassifier::Trained(candidate.split),
            None => DStumpClassifier::Untrained,
        };
        let predictions = hypothesis.classify(sample);
        let weighted_error = match best {
            Some(candidate) => candidate.weighted_error,
            None => {
                let mistakes = helpers::mistakes(
                    predictions.iter().copied(), sample.target()
                );
                helpers::weighted_error(&mistakes, dist)
            },
        };

        WeakHypothesis { hypothesis, predictions, weighted_error }
    }
}


/// A split together with its weighted error.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    split: Split,
    weighted_error: f64,
}


impl Candidate {
    /// Returns the better of the two candidates.
    /// Candidates are totally ordered by
    /// `(weighted_error, dimension, threshold, polarity)`.
    #[inline(always)]
    fn min(self, other: Self) -> Self {
        let order = self.weighted_error.total_cmp(&other.weighted_error)
            .then_with(|| self.split.tie_break(&other.split));
        match order {
            Ordering::Greater => other,
            _ => self,
        }
    }
}
