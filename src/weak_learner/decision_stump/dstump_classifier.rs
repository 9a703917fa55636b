//! Provides the decision stump class.
use std::cmp::Ordering;
use std::fmt;

use crate::{Classifier, Sample};


/// Defines the side of the threshold that is predicted as `-1`.
/// The declaration order is the tie-break order of the stump search:
/// `Gte` is preferred over `Lte`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Polarity {
    /// `x[dimension] >= threshold` is predicted as `-1`.
    Gte,
    /// `x[dimension] <= threshold` is predicted as `-1`.
    Lte,
}


/// A single-feature threshold rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    /// The index of the feature used in prediction.
    pub dimension: usize,
    /// The threshold, one of the values observed in training.
    pub threshold: f64,
    /// The side predicted as `-1`.
    pub polarity: Polarity,
}


impl Split {
    /// Construct a new `Split`.
    #[inline]
    pub fn new(dimension: usize, threshold: f64, polarity: Polarity) -> Self {
        Self { dimension, threshold, polarity }
    }


    /// Predicts the label of a single feature value.
    #[inline(always)]
    pub fn label(&self, value: f64) -> i64 {
        let negative = match self.polarity {
            Polarity::Gte => value >= self.threshold,
            Polarity::Lte => value <= self.threshold,
        };
        if negative { -1 } else { 1 }
    }


    /// The order used to break ties between splits
    /// with the same weighted error:
    /// lower dimension, then lower threshold, then `Gte` before `Lte`.
    #[inline]
    pub fn tie_break(&self, other: &Self) -> Ordering {
        self.dimension.cmp(&other.dimension)
            .then(self.threshold.total_cmp(&other.threshold))
            .then(self.polarity.cmp(&other.polarity))
    }
}


impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.polarity {
            Polarity::Gte => ">=",
            Polarity::Lte => "<=",
        };
        write!(
            f,
            "x[{}] {op} {} ? -1 : +1",
            self.dimension, self.threshold
        )
    }
}


/// The decision stump class.
///
/// An `Untrained` stump has not been produced by [`DStump`](super::DStump)
/// and predicts `+1` for every example.
/// A `Trained` stump predicts by its [`Split`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DStumpClassifier {
    /// No split has been chosen yet.
    #[default]
    Untrained,
    /// The split chosen by the weak learner.
    Trained(Split),
}


impl DStumpClassifier {
    /// Returns the split if the stump is trained.
    #[inline]
    pub fn split(&self) -> Option<&Split> {
        match self {
            Self::Untrained => None,
            Self::Trained(split) => Some(split),
        }
    }


    /// Returns `true` if the stump is trained.
    #[inline]
    pub fn is_trained(&self) -> bool {
        matches!(self, Self::Trained(_))
    }


    /// Predicts the labels of every example in `sample`.
    pub fn classify(&self, sample: &Sample) -> Vec<i64> {
        let n_sample = sample.shape().0;
        match self {
            Self::Untrained => vec![1; n_sample],
            Self::Trained(split) => {
                sample[split.dimension].iter()
                    .map(|&x| split.label(x))
                    .collect()
            },
        }
    }
}


impl Classifier for DStumpClassifier {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        match self {
            Self::Untrained => 1f64,
            Self::Trained(split) => {
                let x = sample.value_at(row, split.dimension);
                split.label(x) as f64
            },
        }
    }


    fn predict_all(&self, sample: &Sample) -> Vec<i64> {
        self.classify(sample)
    }
}


impl fmt::Display for DStumpClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untrained => write!(f, "(untrained) +1"),
            Self::Trained(split) => write!(f, "{split}"),
        }
    }
}
